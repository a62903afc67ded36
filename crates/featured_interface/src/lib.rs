//! Trait definitions at the seams of the featured image worker.
//!
//! The pipeline only talks to its collaborators through these traits, so the
//! HTTP clients can be swapped for the call-counting mocks in [`mock`]
//! (enabled with the `mock` feature).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(any(test, feature = "mock"))]
pub mod mock;
mod traits;

pub use traits::{ContentApi, ImageGenerator, Runner};
