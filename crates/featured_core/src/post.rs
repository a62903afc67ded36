//! Posts read from the content site.

use serde::{Deserialize, Serialize};

/// A rendered text field as returned by the content REST API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedText {
    /// HTML-rendered value
    #[serde(default)]
    pub rendered: Option<String>,
}

/// The subset of a post the pipeline reads.
///
/// # Examples
///
/// ```
/// use featured_core::Post;
///
/// let post: Post = serde_json::from_str(
///     r#"{"id": 42, "title": {"rendered": "Best Cabs in Manchester"}, "featured_media": 0}"#,
/// ).unwrap();
///
/// assert_eq!(post.id, 42);
/// assert_eq!(post.title_rendered(), Some("Best Cabs in Manchester"));
/// assert_eq!(post.featured_media(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Numeric post identifier
    pub id: u64,
    /// Post title
    #[serde(default)]
    pub title: Option<RenderedText>,
    /// Media id of the current featured image, `0` when unset
    #[serde(default)]
    pub featured_media: Option<u64>,
}

impl Post {
    /// The rendered title, if the post has a non-blank one.
    pub fn title_rendered(&self) -> Option<&str> {
        self.title
            .as_ref()
            .and_then(|title| title.rendered.as_deref())
            .filter(|title| !title.trim().is_empty())
    }

    /// The current featured image id, treating `0` as none.
    pub fn featured_media(&self) -> Option<u64> {
        self.featured_media.filter(|id| *id != 0)
    }
}
