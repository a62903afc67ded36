//! Featured image pipeline.
//!
//! One run reads the latest post, turns its title into an image prompt,
//! generates the image, uploads it and sets it as the post's featured image.
//! Each step gates the next and the first failure ends the run.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod orchestrator;
mod prompt;

pub use orchestrator::Orchestrator;
pub use prompt::{PLACEHOLDER_TITLE, build_prompt};
