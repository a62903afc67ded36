//! Image API response variants.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use featured_core::ImageResponseMode;
use featured_error::{PipelineError, PipelineErrorKind, PipelineResult};
use serde_json::Value;

/// Where the generated image lives, as reported by the image API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePayload {
    /// Hosted image that still has to be downloaded.
    UrlResult(String),
    /// Base64-encoded image bytes.
    InlinePayloadResult(String),
}

impl ImagePayload {
    /// Extract the payload for `mode` from a generation response body.
    ///
    /// `Auto` prefers an inline payload when the body carries both.
    ///
    /// # Examples
    ///
    /// ```
    /// use featured_core::ImageResponseMode;
    /// use featured_images::ImagePayload;
    /// use serde_json::json;
    ///
    /// let body = json!({"data": [{"url": "https://cdn.example/a.png"}]});
    /// let payload = ImagePayload::from_response(&body, ImageResponseMode::Url).unwrap();
    /// assert_eq!(payload, ImagePayload::UrlResult("https://cdn.example/a.png".into()));
    /// ```
    pub fn from_response(body: &Value, mode: ImageResponseMode) -> PipelineResult<Self> {
        let url = body.pointer("/data/0/url").and_then(Value::as_str);
        let inline = body.pointer("/data/0/b64_json").and_then(Value::as_str);

        let payload = match mode {
            ImageResponseMode::Url => url.map(|u| Self::UrlResult(u.to_string())),
            ImageResponseMode::InlinePayload => {
                inline.map(|b| Self::InlinePayloadResult(b.to_string()))
            }
            ImageResponseMode::Auto => inline
                .map(|b| Self::InlinePayloadResult(b.to_string()))
                .or_else(|| url.map(|u| Self::UrlResult(u.to_string()))),
        };

        payload.ok_or_else(|| {
            PipelineError::new(PipelineErrorKind::Generation(format!(
                "response has no image for format '{}': {}",
                mode, body
            )))
        })
    }
}

/// Decode a base64 image payload into bytes.
pub(crate) fn decode_base64(encoded: &str) -> PipelineResult<Vec<u8>> {
    STANDARD.decode(encoded.trim()).map_err(|e| {
        PipelineError::new(PipelineErrorKind::MalformedResponse(format!(
            "Invalid base64 image payload: {}",
            e
        )))
    })
}
