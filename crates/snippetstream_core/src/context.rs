//! Optional personalization for generated artifacts.

use serde::{Deserialize, Serialize};

/// Recognised personalization fields, each independently optional.
///
/// An absent or empty context is a no-op: generators that honour context
/// append nothing to their prompts.
///
/// # Examples
///
/// ```
/// use snippetstream_core::PersonalizationContext;
///
/// let context = PersonalizationContext::builder()
///     .audience("indie hackers")
///     .tone("playful")
///     .build()
///     .unwrap();
/// assert_eq!(context.audience().as_deref(), Some("indie hackers"));
/// assert!(context.mood().is_none());
/// assert!(!context.is_empty());
/// assert!(PersonalizationContext::default().is_empty());
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into, strip_option), default)]
pub struct PersonalizationContext {
    /// Who the artifact is written for
    #[serde(default)]
    audience: Option<String>,
    /// Voice of the artifact
    #[serde(default)]
    tone: Option<String>,
    /// Emotional colour of the day
    #[serde(default)]
    mood: Option<String>,
}

impl PersonalizationContext {
    /// Creates a new context builder.
    pub fn builder() -> PersonalizationContextBuilder {
        PersonalizationContextBuilder::default()
    }

    /// Whether every field is absent or blank.
    pub fn is_empty(&self) -> bool {
        [&self.audience, &self.tone, &self.mood]
            .iter()
            .all(|field| field.as_deref().is_none_or(|v| v.trim().is_empty()))
    }
}
