//! Resolved content and its bounds.

use serde::{Deserialize, Serialize};
use snippetstream_error::{InputError, InputErrorKind};

/// Minimum trimmed length, in characters, of usable content.
pub const MIN_CONTENT_CHARS: usize = 10;

/// Characters kept in the response preview before the ellipsis.
pub const PREVIEW_CHARS: usize = 200;

/// Marker appended when content is cut short.
pub const ELLIPSIS: &str = "...";

/// Where the resolved content came from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    /// Inline text in the request body
    #[display("text")]
    Text,
    /// Text extracted from a fetched URL
    #[display("url")]
    Url,
}

/// Plain text ready for generation.
///
/// Construction enforces the minimum length, so a `ResolvedContent` value is
/// always long enough to send to the completion endpoint.
///
/// # Examples
///
/// ```
/// use snippetstream_core::{ContentSource, ResolvedContent};
///
/// let content = ResolvedContent::new("Shipped the login page today.", ContentSource::Text).unwrap();
/// assert_eq!(content.source(), ContentSource::Text);
/// assert!(ResolvedContent::new("   hi   ", ContentSource::Text).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedContent {
    text: String,
    source: ContentSource,
}

impl ResolvedContent {
    /// Validate and wrap resolved text.
    pub fn new(text: impl Into<String>, source: ContentSource) -> Result<Self, InputError> {
        let text = text.into();
        let length = text.trim().chars().count();
        if length < MIN_CONTENT_CHARS {
            return Err(InputError::new(InputErrorKind::ContentTooShort { length }));
        }
        Ok(Self { text, source })
    }

    /// The content text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Where the text came from.
    pub fn source(&self) -> ContentSource {
        self.source
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always false for validated content; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Cut the text to `max_chars` characters and append [`ELLIPSIS`].
    ///
    /// Returns `true` when the text was truncated. Content at or under the
    /// limit is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use snippetstream_core::{ContentSource, ResolvedContent};
    ///
    /// let mut content = ResolvedContent::new("a".repeat(50), ContentSource::Text).unwrap();
    /// assert!(content.truncate_to(20));
    /// assert_eq!(content.len(), 23);
    /// assert!(content.text().ends_with("..."));
    /// ```
    pub fn truncate_to(&mut self, max_chars: usize) -> bool {
        if self.len() <= max_chars {
            return false;
        }
        let mut cut = take_chars(&self.text, max_chars);
        cut.push_str(ELLIPSIS);
        self.text = cut;
        true
    }

    /// First [`PREVIEW_CHARS`] characters, with an ellipsis when longer.
    pub fn preview(&self) -> String {
        if self.len() > PREVIEW_CHARS {
            let mut preview = take_chars(&self.text, PREVIEW_CHARS);
            preview.push_str(ELLIPSIS);
            preview
        } else {
            self.text.clone()
        }
    }

    /// First `max_chars` characters without any marker.
    pub fn head(&self, max_chars: usize) -> String {
        take_chars(&self.text, max_chars)
    }
}

fn take_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
