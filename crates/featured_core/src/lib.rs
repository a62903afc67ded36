//! Core data types and configuration for the featured image worker.
//!
//! Everything here is transient: a pipeline run reads one [`Post`], produces
//! one [`GeneratedImage`] and one [`MediaRecord`], and reports a [`RunResult`].
//! [`AppConfig`] is loaded once at startup and never mutated.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod image;
mod media;
mod post;
mod result;

pub use config::{AppConfig, AppConfigBuilder, ImageResponseMode};
pub use image::GeneratedImage;
pub use media::MediaRecord;
pub use post::{Post, RenderedText};
pub use result::RunResult;
