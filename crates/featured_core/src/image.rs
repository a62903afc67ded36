//! Generated image payloads.

use chrono::{DateTime, Utc};
use derive_getters::Getters;

/// Raw PNG bytes paired with the filename they are uploaded under.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use featured_core::GeneratedImage;
///
/// let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
/// let image = GeneratedImage::timestamped(vec![0x89, 0x50, 0x4E, 0x47], at);
///
/// assert_eq!(image.filename(), "ai-taxi-1700000000123.png");
/// assert_eq!(image.bytes().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GeneratedImage {
    /// Image bytes
    bytes: Vec<u8>,
    /// Upload filename
    filename: String,
}

impl GeneratedImage {
    /// MIME type of every generated image.
    pub const CONTENT_TYPE: &'static str = "image/png";

    /// Wrap image bytes with an explicit filename.
    pub fn new(bytes: Vec<u8>, filename: impl Into<String>) -> Self {
        Self {
            bytes,
            filename: filename.into(),
        }
    }

    /// Wrap image bytes with a filename derived from `at`, so consecutive
    /// runs never collide.
    pub fn timestamped(bytes: Vec<u8>, at: DateTime<Utc>) -> Self {
        Self::new(bytes, format!("ai-taxi-{}.png", at.timestamp_millis()))
    }
}
