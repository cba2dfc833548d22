//! Types exchanged across the completion seam.

use serde::{Deserialize, Serialize};
use snippetstream_core::{Message, PromptPair};

/// One call to the completion endpoint for one model.
///
/// # Examples
///
/// ```
/// use snippetstream_core::PromptPair;
/// use snippetstream_interface::CompletionRequest;
///
/// let prompt = PromptPair::new("Write a thread.", "Morning: [x] shipped login");
/// let request = CompletionRequest::new("mistral", &prompt, 2000);
/// assert_eq!(request.messages().len(), 2);
/// assert_eq!(*request.max_tokens(), 2000);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// Model identifier
    model: String,
    /// Messages in send order
    messages: Vec<Message>,
    /// Output token budget
    max_tokens: u32,
    /// Sampling temperature
    #[builder(default = "0.7")]
    temperature: f32,
}

impl CompletionRequest {
    /// Request `model` to answer `prompt` within `max_tokens`.
    pub fn new(model: impl Into<String>, prompt: &PromptPair, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            messages: prompt.to_messages(),
            max_tokens,
            temperature: 0.7,
        }
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}
