//! Error types for the featured image worker.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `PipelineErrorKind` enumerates every way a pipeline run can fail
//! - `PipelineError` wraps the kind with the source location that raised it
//! - `ConfigError` covers startup configuration problems
//! - `FeaturedError` folds both into one type for binaries and embedders
//!
//! All constructors use `#[track_caller]` so the location is captured
//! automatically.
//!
//! # Examples
//!
//! ```
//! use featured_error::{FeaturedResult, PipelineError, PipelineErrorKind};
//!
//! fn fetch_post() -> FeaturedResult<u64> {
//!     Err(PipelineError::new(PipelineErrorKind::NotFound("no posts".into())))?
//! }
//!
//! assert!(fetch_post().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod pipeline;

pub use config::ConfigError;
pub use error::{FeaturedError, FeaturedErrorKind, FeaturedResult};
pub use pipeline::{PipelineError, PipelineErrorKind, PipelineResult};
