//! WordPress REST client for the featured image worker.
//!
//! Implements [`featured_interface::ContentApi`] against the `wp/v2` REST
//! routes using an application password.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;

pub use client::{REST_PREFIX, WordPressClient};
