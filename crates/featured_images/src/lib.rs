//! Image generation client for the featured image worker.
//!
//! Talks to an OpenAI-compatible `images/generations` endpoint. The API has
//! shipped two response contracts, a hosted URL and an inline base64
//! payload; [`ImageClient`] supports both, selected by
//! [`featured_core::ImageResponseMode`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod payload;

pub use client::{IMAGE_SIZE, ImageClient};
pub use payload::ImagePayload;
