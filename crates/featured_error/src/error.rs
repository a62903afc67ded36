//! Top-level error wrapper types.

use crate::{ConfigError, PipelineError};

/// Every error the worker can produce.
///
/// # Examples
///
/// ```
/// use featured_error::{ConfigError, FeaturedError};
///
/// let err: FeaturedError = ConfigError::new("PORT is not a number").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FeaturedErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Pipeline error
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

/// Featured error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Featured Error: {}", _0)]
pub struct FeaturedError(Box<FeaturedErrorKind>);

impl FeaturedError {
    /// Create a new error from a kind.
    pub fn new(kind: FeaturedErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FeaturedErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FeaturedErrorKind
impl<T> From<T> for FeaturedError
where
    T: Into<FeaturedErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for featured operations.
pub type FeaturedResult<T> = std::result::Result<T, FeaturedError>;
