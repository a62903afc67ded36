//! Pipeline orchestration.

use crate::build_prompt;
use async_trait::async_trait;
use chrono::Utc;
use featured_core::{GeneratedImage, RunResult};
use featured_error::PipelineResult;
use featured_interface::{ContentApi, ImageGenerator, Runner};
use tracing::{debug, info, instrument};

/// Runs the featured image pipeline against a content site and an image
/// generator.
///
/// No step is retried, and a media item uploaded before a failed
/// featured-image update is left in the media library.
pub struct Orchestrator<C, G> {
    content: C,
    images: G,
    skip_if_featured: bool,
}

impl<C, G> Orchestrator<C, G>
where
    C: ContentApi,
    G: ImageGenerator,
{
    /// Creates a new orchestrator.
    pub fn new(content: C, images: G) -> Self {
        Self {
            content,
            images,
            skip_if_featured: false,
        }
    }

    /// Leave posts that already have a featured image untouched.
    pub fn with_skip_if_featured(mut self, skip: bool) -> Self {
        self.skip_if_featured = skip;
        self
    }

    /// The content collaborator.
    pub fn content(&self) -> &C {
        &self.content
    }

    /// The image collaborator.
    pub fn images(&self) -> &G {
        &self.images
    }

    /// Run the pipeline once.
    ///
    /// # Errors
    ///
    /// Returns the first collaborator error unchanged.
    #[instrument(skip(self))]
    pub async fn run_once(&self) -> PipelineResult<RunResult> {
        let post = self.content.latest_post().await?;
        let post_id = post.id;
        debug!(post_id, title = ?post.title_rendered(), "Fetched latest post");

        if self.skip_if_featured
            && let Some(existing) = post.featured_media()
        {
            info!(post_id, media_id = existing, "Post already has a featured image, skipping");
            return Ok(RunResult::skipped(post_id, existing));
        }

        let prompt = build_prompt(post.title_rendered());
        let bytes = self.images.generate(&prompt).await?;

        let image = GeneratedImage::timestamped(bytes, Utc::now());
        let media = self.content.upload_media(&image).await?;

        self.content.set_featured_image(post_id, media.id).await?;

        info!(post_id, media_id = media.id, "Featured image set");
        Ok(RunResult::completed(post_id, media.id))
    }
}

#[async_trait]
impl<C, G> Runner for Orchestrator<C, G>
where
    C: ContentApi,
    G: ImageGenerator,
{
    async fn run(&self) -> PipelineResult<RunResult> {
        self.run_once().await
    }
}
