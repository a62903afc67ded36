//! Terminal output of a pipeline run.

use serde::{Deserialize, Serialize};

/// What a successful run reports back to the trigger caller.
///
/// # Examples
///
/// ```
/// use featured_core::RunResult;
///
/// let json = serde_json::to_value(RunResult::completed(42, 900)).unwrap();
/// assert_eq!(json, serde_json::json!({"ok": true, "postId": 42, "mediaId": 900}));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    /// Always true for a returned result
    pub ok: bool,
    /// Post that received the featured image
    pub post_id: u64,
    /// Media item set as the featured image
    pub media_id: u64,
    /// Set when the run stopped because the post already had a featured image
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub skipped: bool,
}

impl RunResult {
    /// A run that generated, uploaded and attached a new image.
    pub fn completed(post_id: u64, media_id: u64) -> Self {
        Self {
            ok: true,
            post_id,
            media_id,
            skipped: false,
        }
    }

    /// A run that left an existing featured image in place.
    pub fn skipped(post_id: u64, media_id: u64) -> Self {
        Self {
            ok: true,
            post_id,
            media_id,
            skipped: true,
        }
    }
}
