//! Incoming generation requests.

use crate::{EnabledPlatforms, PersonalizationContext};
use serde::{Deserialize, Serialize};
use snippetstream_error::InputError;

fn default_content_type() -> String {
    "markdown".to_string()
}

/// Body of a repurpose request.
///
/// Exactly one of `content` / `url` is expected; when both are given the URL
/// wins. Browser and session metadata are accepted so clients can send them,
/// but nothing in generation reads them.
///
/// # Examples
///
/// ```
/// use snippetstream_core::{GenerationRequest, RequestedSource};
///
/// let request = GenerationRequest::from_text("Morning: [x] shipped login")
///     .with_url("https://example.com/log");
/// assert!(matches!(request.requested_source(), Some(RequestedSource::Url(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Inline daily log
    #[serde(default)]
    pub content: Option<String>,
    /// URL of a page holding the daily log
    #[serde(default)]
    pub url: Option<String>,
    /// Content type tag supplied by the client
    #[serde(default = "default_content_type")]
    pub content_type: String,
    /// Platform identifiers; absent means all three
    #[serde(default)]
    pub enabled_platforms: Option<Vec<String>>,
    /// Optional personalization
    #[serde(default)]
    pub context: Option<PersonalizationContext>,
    /// Client browser description (ignored)
    #[serde(default)]
    pub browser_info: Option<serde_json::Value>,
    /// Client session id (ignored)
    #[serde(default)]
    pub session_id: Option<String>,
    /// Client timezone (ignored)
    #[serde(default)]
    pub timezone: Option<String>,
    /// Client screen resolution (ignored)
    #[serde(default)]
    pub screen_resolution: Option<String>,
}

/// The content source a request asks for, URL first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestedSource<'a> {
    /// Fetch and reduce this URL
    Url(&'a str),
    /// Use this text as-is
    Text(&'a str),
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            content: None,
            url: None,
            content_type: default_content_type(),
            enabled_platforms: None,
            context: None,
            browser_info: None,
            session_id: None,
            timezone: None,
            screen_resolution: None,
        }
    }
}

impl GenerationRequest {
    /// Request generation from inline text.
    pub fn from_text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Request generation from a URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Set the URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Restrict generation to the given platform identifiers.
    pub fn with_platforms<S: Into<String>>(mut self, platforms: impl IntoIterator<Item = S>) -> Self {
        self.enabled_platforms = Some(platforms.into_iter().map(Into::into).collect());
        self
    }

    /// Attach a personalization context.
    pub fn with_context(mut self, context: PersonalizationContext) -> Self {
        self.context = Some(context);
        self
    }

    /// The source to resolve, preferring a non-blank URL over inline text.
    pub fn requested_source(&self) -> Option<RequestedSource<'_>> {
        if let Some(url) = self.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            return Some(RequestedSource::Url(url));
        }
        self.content.as_deref().filter(|c| !c.is_empty()).map(RequestedSource::Text)
    }

    /// Whether the request asks for a URL to be fetched.
    pub fn wants_url(&self) -> bool {
        matches!(self.requested_source(), Some(RequestedSource::Url(_)))
    }

    /// Parse the enabled platform set, defaulting to all three.
    pub fn platforms(&self) -> Result<EnabledPlatforms, InputError> {
        match &self.enabled_platforms {
            None => Ok(EnabledPlatforms::all()),
            Some(ids) => EnabledPlatforms::parse(ids),
        }
    }
}
