//! Process-wide configuration.
//!
//! Loaded once at startup from, in increasing precedence:
//! 1. Built-in defaults
//! 2. `./featured.toml` (optional)
//! 3. Environment variables (`OPENAI_API_KEY`, `WP_BASE_URL`, ...)
//!
//! The resulting [`AppConfig`] is immutable and passed explicitly into every
//! component's constructor.

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use derive_getters::Getters;
use featured_error::{ConfigError, FeaturedError, FeaturedResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

const DEFAULT_RUN_SECRET: &str = "change-me";
const DEFAULT_PORT: u16 = 10000;
const DEFAULT_IMAGE_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";

/// Which response contract the image API is expected to follow.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum ImageResponseMode {
    /// The API returns a hosted URL that must be downloaded.
    #[default]
    #[display("url")]
    Url,
    /// The API returns the image inline as base64.
    #[serde(rename = "b64_json", alias = "inline")]
    #[display("b64_json")]
    InlinePayload,
    /// Accept whichever shape the API returns.
    #[display("auto")]
    Auto,
}

impl ImageResponseMode {
    /// Value for the request's `response_format` selector, if one is sent.
    pub fn response_format(self) -> Option<&'static str> {
        match self {
            Self::Url => Some("url"),
            Self::InlinePayload => Some("b64_json"),
            Self::Auto => None,
        }
    }
}

/// Immutable worker configuration.
///
/// # Examples
///
/// ```
/// use featured_core::{AppConfigBuilder, ImageResponseMode};
///
/// let config = AppConfigBuilder::default()
///     .openai_api_key("sk-test")
///     .wp_base_url("https://cabs.example/")
///     .wp_username("editor")
///     .wp_app_password("abcd efgh")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.wp_base_url(), "https://cabs.example");
/// assert_eq!(*config.port(), 10000);
/// assert_eq!(*config.image_response_format(), ImageResponseMode::Url);
/// ```
#[derive(Clone, PartialEq, Eq, Getters, Deserialize, derive_builder::Builder)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct AppConfig {
    /// Bearer token for the image API
    openai_api_key: String,
    /// Content site URL, without the REST prefix
    wp_base_url: String,
    /// Content site user name
    wp_username: String,
    /// Content site application password
    wp_app_password: String,
    /// Shared secret expected in `/run?secret=`
    #[builder(default = "DEFAULT_RUN_SECRET.to_string()")]
    #[serde(default = "default_run_secret")]
    run_secret: String,
    /// Listen port
    #[builder(default = "DEFAULT_PORT")]
    #[serde(default = "default_port")]
    port: u16,
    /// Image API base URL
    #[builder(default = "DEFAULT_IMAGE_API_BASE.to_string()")]
    #[serde(default = "default_image_api_base")]
    image_api_base: String,
    /// Image model identifier
    #[builder(default = "DEFAULT_IMAGE_MODEL.to_string()")]
    #[serde(default = "default_image_model")]
    image_model: String,
    /// Image API response contract
    #[builder(default)]
    #[serde(default)]
    image_response_format: ImageResponseMode,
    /// Leave posts that already have a featured image untouched
    #[builder(default)]
    #[serde(default)]
    skip_if_featured: bool,
}

fn default_run_secret() -> String {
    DEFAULT_RUN_SECRET.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_image_api_base() -> String {
    DEFAULT_IMAGE_API_BASE.to_string()
}

fn default_image_model() -> String {
    DEFAULT_IMAGE_MODEL.to_string()
}

impl AppConfigBuilder {
    /// Build the configuration, trimming trailing slashes from base URLs.
    ///
    /// # Errors
    ///
    /// Returns error if a required field is missing.
    pub fn build(&self) -> Result<AppConfig, ConfigError> {
        self.build_internal()
            .map(AppConfig::normalized)
            .map_err(|e| ConfigError::new(e.to_string()))
    }
}

impl AppConfig {
    /// Load configuration from `./featured.toml` and the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    #[instrument]
    pub fn load() -> FeaturedResult<Self> {
        debug!("Loading configuration: environment > featured.toml > defaults");

        let builder = Config::builder()
            .add_source(File::with_name("featured").required(false))
            .add_source(Environment::default());

        Self::from_builder(builder)
    }

    /// Load configuration from an explicit set of variables instead of the
    /// process environment.
    ///
    /// Keys use the environment names (`WP_BASE_URL`, `PORT`, ...).
    pub fn from_vars<I, K, V>(vars: I) -> FeaturedResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut source = config::Map::new();
        for (key, value) in vars {
            source.insert(key.into(), value.into());
        }

        let builder = Config::builder()
            .add_source(Environment::default().source(Some(source)));

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> FeaturedResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                FeaturedError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                FeaturedError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        let config = config.normalized();
        debug!(config = ?config, "Configuration loaded");
        Ok(config)
    }

    fn normalized(mut self) -> Self {
        self.wp_base_url = self.wp_base_url.trim_end_matches('/').to_string();
        self.image_api_base = self.image_api_base.trim_end_matches('/').to_string();
        self
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("openai_api_key", &"<redacted>")
            .field("wp_base_url", &self.wp_base_url)
            .field("wp_username", &self.wp_username)
            .field("wp_app_password", &"<redacted>")
            .field("run_secret", &"<redacted>")
            .field("port", &self.port)
            .field("image_api_base", &self.image_api_base)
            .field("image_model", &self.image_model)
            .field("image_response_format", &self.image_response_format)
            .field("skip_if_featured", &self.skip_if_featured)
            .finish()
    }
}
