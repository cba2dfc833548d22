//! Configuration for the completion endpoint connection

use snippetstream_error::ConfigError;
use std::time::Duration;

/// Environment variable holding the endpoint credential (required).
pub const API_KEY_ENV: &str = "COMPLETION_API_KEY";

/// Environment variable overriding the endpoint base URL.
pub const BASE_URL_ENV: &str = "COMPLETION_BASE_URL";

/// Base URL used when neither configuration nor environment names one.
pub const DEFAULT_BASE_URL: &str = "https://gen.pollinations.ai/v1";

/// Per-call timeout used when configuration does not name one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for the completion endpoint.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CompletionConfig {
    /// Base URL of the OpenAI-compatible API (e.g., "https://gen.pollinations.ai/v1")
    pub base_url: String,
    /// Bearer credential
    pub api_key: String,
    /// Fixed timeout applied to every call
    pub timeout: Duration,
    /// Skip TLS certificate verification
    pub accept_invalid_certs: bool,
}

impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish_non_exhaustive()
    }
}

impl CompletionConfig {
    /// Create a configuration with default timeout and certificate handling.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: true,
        }
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `COMPLETION_API_KEY` (required)
    /// - `COMPLETION_BASE_URL` (optional, falls back to `default_base_url`)
    pub fn from_env(default_base_url: &str) -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::new(format!("{} missing in environment", API_KEY_ENV)))?;
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| default_base_url.to_string());

        Ok(Self::new(base_url, api_key))
    }

    /// Set the per-call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Choose whether TLS certificates are verified
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Chat completions URL under the base URL
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
