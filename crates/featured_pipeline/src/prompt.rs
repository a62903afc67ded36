//! Image prompt template.

/// Title used when a post has no usable title.
pub const PLACEHOLDER_TITLE: &str = "Manchester taxi service";

/// Build the image prompt for a post title.
///
/// Blank or missing titles fall back to [`PLACEHOLDER_TITLE`].
///
/// # Examples
///
/// ```
/// use featured_pipeline::{PLACEHOLDER_TITLE, build_prompt};
///
/// assert!(build_prompt(Some("Best Cabs in Manchester")).contains("\"Best Cabs in Manchester\""));
/// assert!(build_prompt(None).contains(PLACEHOLDER_TITLE));
/// ```
pub fn build_prompt(title: Option<&str>) -> String {
    let title = title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(PLACEHOLDER_TITLE);

    format!(
        "Photo-realistic daytime photograph illustrating a blog post titled \"{title}\". \
         A clean, modern taxi such as a Toyota Prius, Skoda Octavia or Kia Niro parked on a \
         street in Manchester, UK, with recognisable Manchester architecture in the background. \
         The car is right-hand drive with UK-style number plates. Natural daylight, sharp focus, \
         realistic colours. No text, no people, no logos, no watermarks."
    )
}
