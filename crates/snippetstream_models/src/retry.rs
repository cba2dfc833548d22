//! Model fallback policy over a completion driver.
//!
//! A call walks an ordered model list, trying each model a fixed number of
//! times. The first non-empty answer wins. Empty answers and transport
//! errors are soft failures; errors additionally wait a fixed backoff before
//! the next attempt. Running out of (model, attempt) pairs is reported as
//! [`CompletionOutcome::Exhausted`], never as an error.

use snippetstream_core::PromptPair;
use snippetstream_error::{BuilderError, BuilderErrorKind};
use snippetstream_interface::{CompletionDriver, CompletionRequest};
use std::sync::Arc;
use std::time::Duration;
use tokio_retry2::strategy::FixedInterval;
use tracing::{debug, info, instrument, warn};

/// Result of a fallback-policy call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompletionOutcome {
    /// First non-empty answer, trimmed
    Success(String),
    /// Every (model, attempt) pair came back empty or failed
    Exhausted,
}

impl CompletionOutcome {
    /// The generated text, if any.
    pub fn text(self) -> Option<String> {
        match self {
            CompletionOutcome::Success(text) => Some(text),
            CompletionOutcome::Exhausted => None,
        }
    }
}

/// Model priority list and per-model attempt budget.
///
/// # Examples
///
/// ```
/// use snippetstream_models::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::builder()
///     .models(vec!["a".to_string(), "b".to_string()])
///     .backoff(Duration::ZERO)
///     .build()
///     .unwrap();
/// assert_eq!(*policy.attempts_per_model(), 2);
/// assert_eq!(policy.max_calls(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct RetryPolicy {
    /// Model identifiers, fastest / most reliable first
    #[builder(default = "default_models()")]
    models: Vec<String>,
    /// Attempts per model
    #[builder(default = "2")]
    attempts_per_model: usize,
    /// Pause after a failed (erroring) attempt
    #[builder(default = "Duration::from_millis(500)")]
    backoff: Duration,
    /// Sampling temperature sent with every call
    #[builder(default = "0.7")]
    temperature: f32,
}

fn default_models() -> Vec<String> {
    ["mistral", "openai", "searchgpt"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            models: default_models(),
            attempts_per_model: 2,
            backoff: Duration::from_millis(500),
            temperature: 0.7,
        }
    }
}

impl RetryPolicyBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.models.as_ref().is_some_and(|models| models.is_empty()) {
            return Err("at least one model is required".to_string());
        }
        if self.attempts_per_model == Some(0) {
            return Err("attempts_per_model must be at least 1".to_string());
        }
        Ok(())
    }
}

impl From<RetryPolicyBuilderError> for BuilderError {
    #[track_caller]
    fn from(err: RetryPolicyBuilderError) -> Self {
        let kind = match err {
            RetryPolicyBuilderError::UninitializedField(field) => BuilderErrorKind::MissingField {
                target: "RetryPolicy",
                field,
            },
            other => BuilderErrorKind::Invalid {
                target: "RetryPolicy",
                reason: other.to_string(),
            },
        };
        BuilderError::new(kind)
    }
}

impl RetryPolicy {
    /// Creates a new policy builder.
    pub fn builder() -> RetryPolicyBuilder {
        RetryPolicyBuilder::default()
    }

    /// Upper bound on endpoint calls for one completion.
    pub fn max_calls(&self) -> usize {
        self.models.len() * self.attempts_per_model
    }
}

/// Bounded walk over (model index, attempt index) pairs in policy order.
///
/// # Examples
///
/// ```
/// use snippetstream_models::AttemptCursor;
///
/// let pairs: Vec<_> = AttemptCursor::new(2, 2).collect();
/// assert_eq!(pairs, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptCursor {
    models: usize,
    attempts: usize,
    model: usize,
    attempt: usize,
}

impl AttemptCursor {
    /// Cursor over `models` x `attempts` pairs.
    pub fn new(models: usize, attempts: usize) -> Self {
        Self {
            models,
            attempts,
            model: 0,
            attempt: 0,
        }
    }

    /// Whether another pair remains.
    pub fn has_next(&self) -> bool {
        self.attempts > 0 && self.model < self.models
    }
}

impl Iterator for AttemptCursor {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        let current = (self.model, self.attempt);
        self.attempt += 1;
        if self.attempt == self.attempts {
            self.attempt = 0;
            self.model += 1;
        }
        Some(current)
    }
}

/// Completion with model fallback over a shared driver.
#[derive(Clone)]
pub struct RetryableCompletion {
    driver: Arc<dyn CompletionDriver>,
    policy: RetryPolicy,
}

impl std::fmt::Debug for RetryableCompletion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryableCompletion")
            .field("provider", &self.driver.provider_name())
            .field("policy", &self.policy)
            .finish()
    }
}

impl RetryableCompletion {
    /// Wrap a driver with a fallback policy.
    pub fn new(driver: Arc<dyn CompletionDriver>, policy: RetryPolicy) -> Self {
        Self { driver, policy }
    }

    /// The active policy.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Run the fallback policy for one prompt.
    #[instrument(skip(self, prompt), fields(provider = self.driver.provider_name()))]
    pub async fn complete(&self, prompt: &PromptPair, max_tokens: u32) -> CompletionOutcome {
        let models = self.policy.models();
        let mut cursor = AttemptCursor::new(models.len(), self.policy.attempts_per_model);
        let mut backoff = FixedInterval::new(self.policy.backoff);

        while let Some((model_index, attempt)) = cursor.next() {
            let model = &models[model_index];
            let request = CompletionRequest::new(model.as_str(), prompt, max_tokens)
                .with_temperature(self.policy.temperature);

            debug!(model = %model, attempt = attempt + 1, "Requesting completion");
            match self.driver.complete(&request).await {
                Ok(Some(text)) if !text.trim().is_empty() => {
                    info!(model = %model, attempt = attempt + 1, "Generated content");
                    return CompletionOutcome::Success(text.trim().to_string());
                }
                Ok(_) => {
                    warn!(model = %model, attempt = attempt + 1, "Model returned empty content");
                }
                Err(e) => {
                    warn!(model = %model, attempt = attempt + 1, error = %e, "Completion attempt failed");
                    if cursor.has_next() {
                        if let Some(delay) = backoff.next() {
                            tokio::time::sleep(delay).await;
                        }
                    }
                }
            }
        }

        warn!(calls = self.policy.max_calls(), "All models exhausted");
        CompletionOutcome::Exhausted
    }
}
