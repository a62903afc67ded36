//! Errors raised while running the featured image pipeline.

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Error kinds for pipeline operations.
///
/// The display text of a kind is what the trigger endpoint sends back to the
/// caller, so it never carries source locations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PipelineErrorKind {
    /// The trigger secret did not match.
    #[display("Forbidden: run secret rejected")]
    AuthRejected,

    /// The content site returned no posts.
    #[display("Not found: {}", _0)]
    NotFound(String),

    /// The image API call failed or returned no usable image.
    #[display("Image generation failed: {}", _0)]
    Generation(String),

    /// Downloading a hosted image failed.
    #[display("Image download failed: {}", _0)]
    Download(String),

    /// Uploading the media item failed.
    #[display("Media upload failed: {}", _0)]
    Upload(String),

    /// Setting the post's featured image failed.
    #[display("Featured image update failed: {}", _0)]
    Update(String),

    /// A response was missing an expected field or could not be parsed.
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),

    /// Transport failure, or a non-success status on a plain read.
    #[display("HTTP request failed: {}", _0)]
    Http(String),
}

/// Pipeline error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The error kind
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use featured_error::{PipelineError, PipelineErrorKind};
    ///
    /// let err = PipelineError::new(PipelineErrorKind::Upload("413: too large".into()));
    /// assert_eq!(err.kind().to_string(), "Media upload failed: 413: too large");
    /// ```
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PipelineErrorKind {
        &self.kind
    }
}

impl From<PipelineErrorKind> for PipelineError {
    #[track_caller]
    fn from(kind: PipelineErrorKind) -> Self {
        Self::new(kind)
    }
}
