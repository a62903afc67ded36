//! Shared state for the trigger endpoint.

use featured_core::{AppConfig, RunResult};
use featured_error::FeaturedResult;
use featured_images::ImageClient;
use featured_interface::Runner;
use featured_pipeline::Orchestrator;
use featured_wordpress::WordPressClient;
use std::sync::Arc;

/// State shared by all requests.
#[derive(Clone)]
pub struct AppState {
    runner: Arc<dyn Runner>,
    secret: Arc<str>,
}

impl AppState {
    /// Creates new state around any pipeline runner.
    pub fn new(runner: Arc<dyn Runner>, secret: impl Into<String>) -> Self {
        let secret: String = secret.into();
        Self {
            runner,
            secret: Arc::from(secret),
        }
    }

    /// Creates state running the HTTP-backed pipeline described by `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(build_orchestrator(config)), config.run_secret().clone())
    }

    /// The pipeline runner.
    pub fn runner(&self) -> &Arc<dyn Runner> {
        &self.runner
    }

    /// Whether `candidate` matches the configured secret.
    pub fn secret_matches(&self, candidate: Option<&str>) -> bool {
        candidate == Some(&*self.secret)
    }
}

/// Build the pipeline with real HTTP clients.
pub fn build_orchestrator(config: &AppConfig) -> Orchestrator<WordPressClient, ImageClient> {
    Orchestrator::new(WordPressClient::new(config), ImageClient::new(config))
        .with_skip_if_featured(*config.skip_if_featured())
}

/// Run the pipeline once without starting a listener.
///
/// # Errors
///
/// Returns the pipeline error of the failed step.
pub async fn run_once(config: &AppConfig) -> FeaturedResult<RunResult> {
    Ok(build_orchestrator(config).run_once().await?)
}
