//! Mock collaborators for testing.
//!
//! Each mock counts its calls so tests can assert which steps of a run were
//! reached.

use crate::{ContentApi, ImageGenerator};
use async_trait::async_trait;
use featured_core::{GeneratedImage, MediaRecord, Post, RenderedText};
use featured_error::{PipelineError, PipelineErrorKind, PipelineResult};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Build a post with the given id and title.
pub fn post(id: u64, title: Option<&str>) -> Post {
    Post {
        id,
        title: title.map(|t| RenderedText {
            rendered: Some(t.to_string()),
        }),
        featured_media: Some(0),
    }
}

/// Mock content site.
pub struct MockContentApi {
    post: Result<Post, PipelineErrorKind>,
    upload: Result<u64, PipelineErrorKind>,
    update: Result<(), PipelineErrorKind>,
    latest_post_calls: AtomicUsize,
    upload_calls: AtomicUsize,
    update_calls: AtomicUsize,
    uploaded: Mutex<Vec<GeneratedImage>>,
    updates: Mutex<Vec<(u64, u64)>>,
}

impl MockContentApi {
    /// A site whose latest post is `post` and whose uploads get `media_id`.
    pub fn new(post: Post, media_id: u64) -> Self {
        Self {
            post: Ok(post),
            upload: Ok(media_id),
            update: Ok(()),
            latest_post_calls: AtomicUsize::new(0),
            upload_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            uploaded: Mutex::new(Vec::new()),
            updates: Mutex::new(Vec::new()),
        }
    }

    /// A site with no posts.
    pub fn empty() -> Self {
        let mut mock = Self::new(post(0, None), 0);
        mock.post = Err(PipelineErrorKind::NotFound("no posts returned".into()));
        mock
    }

    /// Make uploads fail with `kind`.
    pub fn with_upload_error(mut self, kind: PipelineErrorKind) -> Self {
        self.upload = Err(kind);
        self
    }

    /// Make featured-image updates fail with `kind`.
    pub fn with_update_error(mut self, kind: PipelineErrorKind) -> Self {
        self.update = Err(kind);
        self
    }

    /// Number of `latest_post` calls.
    pub fn latest_post_calls(&self) -> usize {
        self.latest_post_calls.load(Ordering::SeqCst)
    }

    /// Number of `upload_media` calls.
    pub fn upload_calls(&self) -> usize {
        self.upload_calls.load(Ordering::SeqCst)
    }

    /// Number of `set_featured_image` calls.
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    /// Total calls across all operations.
    pub fn total_calls(&self) -> usize {
        self.latest_post_calls() + self.upload_calls() + self.update_calls()
    }

    /// Images passed to `upload_media`, in call order.
    pub fn uploaded(&self) -> Vec<GeneratedImage> {
        self.uploaded.lock().unwrap().clone()
    }

    /// `(post_id, media_id)` pairs passed to `set_featured_image`.
    pub fn updates(&self) -> Vec<(u64, u64)> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentApi for MockContentApi {
    async fn latest_post(&self) -> PipelineResult<Post> {
        self.latest_post_calls.fetch_add(1, Ordering::SeqCst);
        self.post.clone().map_err(PipelineError::new)
    }

    async fn upload_media(&self, image: &GeneratedImage) -> PipelineResult<MediaRecord> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        self.uploaded.lock().unwrap().push(image.clone());
        self.upload
            .clone()
            .map(|id| MediaRecord { id })
            .map_err(PipelineError::new)
    }

    async fn set_featured_image(&self, post_id: u64, media_id: u64) -> PipelineResult<()> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.updates.lock().unwrap().push((post_id, media_id));
        self.update.clone().map_err(PipelineError::new)
    }
}

/// Mock image generator.
pub struct MockImageGenerator {
    result: Result<Vec<u8>, PipelineErrorKind>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockImageGenerator {
    /// A generator that always returns `bytes`.
    pub fn new_success(bytes: Vec<u8>) -> Self {
        Self {
            result: Ok(bytes),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A generator that always fails with `kind`.
    pub fn new_error(kind: PipelineErrorKind) -> Self {
        Self {
            result: Err(kind),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Number of `generate` calls.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn generate(&self, prompt: &str) -> PipelineResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.result.clone().map_err(PipelineError::new)
    }
}
