//! Completion endpoint client and model fallback for SnippetStream.
//!
//! - [`CompletionClient`] talks to an OpenAI-compatible `/chat/completions`
//!   endpoint and implements [`snippetstream_interface::CompletionDriver`].
//! - [`RetryableCompletion`] runs the model/attempt fallback policy over any
//!   driver and reports [`CompletionOutcome::Exhausted`] instead of failing.
//!
//! ```rust,no_run
//! use snippetstream_core::PromptPair;
//! use snippetstream_models::{CompletionClient, RetryPolicy, RetryableCompletion, DEFAULT_BASE_URL};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CompletionClient::from_env(DEFAULT_BASE_URL)?;
//!     let completion = RetryableCompletion::new(Arc::new(client), RetryPolicy::default());
//!
//!     let prompt = PromptPair::new("Summarise the log.", "Morning: [x] shipped login");
//!     if let Some(text) = completion.complete(&prompt, 500).await.text() {
//!         println!("{}", text);
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod request;
mod response;
mod retry;

pub use client::CompletionClient;
pub use config::{API_KEY_ENV, BASE_URL_ENV, CompletionConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use request::ChatCompletionRequest;
pub use response::{ChatCompletionResponse, Choice, ChoiceMessage, Usage};
pub use retry::{
    AttemptCursor, CompletionOutcome, RetryPolicy, RetryPolicyBuilder, RetryPolicyBuilderError,
    RetryableCompletion,
};
