//! Collaborator traits.

use async_trait::async_trait;
use featured_core::{GeneratedImage, MediaRecord, Post, RunResult};
use featured_error::PipelineResult;

/// Read/write access to the content site.
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Fetch the most recent post.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the site has no posts.
    async fn latest_post(&self) -> PipelineResult<Post>;

    /// Upload an image as a media item.
    ///
    /// # Errors
    ///
    /// Returns `Upload` if the site rejects the upload or omits the media id.
    async fn upload_media(&self, image: &GeneratedImage) -> PipelineResult<MediaRecord>;

    /// Point a post's featured image at an uploaded media item.
    ///
    /// # Errors
    ///
    /// Returns `Update` if the site rejects the change.
    async fn set_featured_image(&self, post_id: u64, media_id: u64) -> PipelineResult<()>;
}

/// Text-to-image generation.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate one image for `prompt`, returning its PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns `Generation` or `Download` when no image could be obtained.
    async fn generate(&self, prompt: &str) -> PipelineResult<Vec<u8>>;
}

/// Something that runs the whole pipeline once.
#[async_trait]
pub trait Runner: Send + Sync {
    /// Run the pipeline to completion or first failure.
    async fn run(&self) -> PipelineResult<RunResult>;
}
