//! HTTP transport to the completion endpoint.

use crate::{ChatCompletionRequest, ChatCompletionResponse, CompletionConfig};
use async_trait::async_trait;
use snippetstream_error::{CompletionError, CompletionErrorKind, ConfigError};
use snippetstream_interface::{CompletionDriver, CompletionRequest};
use tracing::instrument;

/// Client for an OpenAI-compatible chat completion endpoint.
///
/// Built once at startup and shared by reference. The underlying
/// `reqwest::Client` pools connections and is safe for concurrent use, so
/// every generation task calls through the same handle without locking.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    config: CompletionConfig,
    client: reqwest::Client,
}

impl CompletionClient {
    /// Create a new completion client.
    ///
    /// Fails with a [`ConfigError`] when the credential is empty or the
    /// transport cannot be built.
    #[instrument(skip(config), fields(base_url = %config.base_url))]
    pub fn new(config: CompletionConfig) -> Result<Self, ConfigError> {
        if config.api_key.trim().is_empty() {
            return Err(ConfigError::new("completion API key is empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)))?;

        tracing::debug!("Created completion client");
        Ok(Self { config, client })
    }

    /// Create a client from `COMPLETION_API_KEY` / `COMPLETION_BASE_URL`.
    pub fn from_env(default_base_url: &str) -> Result<Self, ConfigError> {
        Self::new(CompletionConfig::from_env(default_base_url)?)
    }

    /// Get the client configuration
    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// Send a chat completion request
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionError> {
        let url = self.config.completions_url();
        tracing::debug!("Sending chat completion request to {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                CompletionError::new(CompletionErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::new(CompletionErrorKind::Status {
                status_code: status.as_u16(),
                message: if body.is_empty() {
                    status.to_string()
                } else {
                    body
                },
            }));
        }

        response.json().await.map_err(|e| {
            CompletionError::new(CompletionErrorKind::Deserialization(e.to_string()))
        })
    }
}

#[async_trait]
impl CompletionDriver for CompletionClient {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<Option<String>, CompletionError> {
        let chat_request = ChatCompletionRequest::from(request);
        let response = self.chat_completion(&chat_request).await?;
        Ok(response.first_text())
    }

    fn provider_name(&self) -> &'static str {
        "openai-compatible"
    }
}
