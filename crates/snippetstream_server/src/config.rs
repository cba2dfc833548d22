//! Service configuration loading.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (`include_str!` of `snippetstream.toml`)
//! - `~/.config/snippetstream/snippetstream.toml`
//! - `./snippetstream.toml`
//! - An explicit path passed with `--config`

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use snippetstream_core::FeatureLimits;
use snippetstream_error::{BuilderError, ConfigError, SnippetResult};
use snippetstream_fetch::FetchConfig;
use snippetstream_models::{CompletionConfig, RetryPolicy};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../snippetstream.toml");

/// Tier applied to accounts whose tier name is not configured.
pub const FALLBACK_TIER: &str = "free";

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ServerSection {
    /// Listen address
    bind: String,
    /// Emit JSON logs instead of human-readable ones
    #[serde(default)]
    json_logs: bool,
}

/// `[completion]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct CompletionSection {
    /// Base URL of the OpenAI-compatible endpoint
    base_url: String,
    /// Per-call timeout in seconds
    timeout_secs: u64,
    /// Sampling temperature
    temperature: f32,
    /// Model priority list
    models: Vec<String>,
    /// Attempts per model
    attempts_per_model: usize,
    /// Pause after an erroring attempt, in milliseconds
    backoff_ms: u64,
    /// Skip TLS certificate verification
    #[serde(default)]
    accept_invalid_certs: bool,
}

impl CompletionSection {
    /// Connection settings for `api_key`.
    ///
    /// `COMPLETION_BASE_URL`, when set, overrides the configured base URL.
    pub fn client_config(&self, api_key: impl Into<String>) -> CompletionConfig {
        let base_url = std::env::var(snippetstream_models::BASE_URL_ENV)
            .unwrap_or_else(|_| self.base_url.clone());
        CompletionConfig::new(base_url, api_key)
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_accept_invalid_certs(self.accept_invalid_certs)
    }

    /// Connection settings with the credential read from the environment.
    pub fn client_config_from_env(&self) -> Result<CompletionConfig, ConfigError> {
        let env = CompletionConfig::from_env(&self.base_url)?;
        Ok(self.client_config(env.api_key))
    }

    /// Fallback policy described by this section.
    pub fn retry_policy(&self) -> Result<RetryPolicy, BuilderError> {
        Ok(RetryPolicy::builder()
            .models(self.models.clone())
            .attempts_per_model(self.attempts_per_model)
            .backoff(Duration::from_millis(self.backoff_ms))
            .temperature(self.temperature)
            .build()?)
    }
}

/// `[fetch]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct FetchSection {
    /// Fetch timeout in seconds
    timeout_secs: u64,
    /// Characters of reduced page text kept
    max_chars: usize,
    /// User agent sent with each fetch
    user_agent: String,
}

impl FetchSection {
    /// Fetcher settings described by this section.
    pub fn fetch_config(&self) -> Result<FetchConfig, BuilderError> {
        Ok(FetchConfig::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .max_chars(self.max_chars)
            .user_agent(self.user_agent.clone())
            .build()?)
    }
}

/// `[tiers.<name>]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct TierConfig {
    /// Content longer than this is truncated before generation
    max_content_length: usize,
    /// Generations per UTC day; absent means unlimited
    #[serde(default)]
    daily_generations: Option<u32>,
    /// Whether URL sources are allowed
    #[serde(default)]
    url_processing: bool,
}

impl TierConfig {
    /// The limits this tier grants.
    pub fn limits(&self) -> FeatureLimits {
        FeatureLimits::new(
            self.max_content_length,
            self.daily_generations,
            self.url_processing,
        )
    }
}

/// One `[[accounts]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct AccountConfig {
    /// Bearer key the account authenticates with
    api_key: String,
    /// Account identifier
    user_id: String,
    /// Tier name, a key of `[tiers]`
    #[serde(default = "default_tier")]
    tier: String,
    /// Inactive accounts are rejected
    #[serde(default = "default_active")]
    active: bool,
}

fn default_tier() -> String {
    FALLBACK_TIER.to_string()
}

fn default_active() -> bool {
    true
}

/// Complete service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ServiceConfig {
    /// HTTP listener
    server: ServerSection,
    /// Completion endpoint and fallback policy
    completion: CompletionSection,
    /// URL retrieval
    fetch: FetchSection,
    /// Plan tiers by name
    #[serde(default)]
    tiers: HashMap<String, TierConfig>,
    /// Known API accounts
    #[serde(default)]
    accounts: Vec<AccountConfig>,
}

impl ServiceConfig {
    /// Load configuration with precedence: explicit path > current dir > home dir > bundled defaults.
    pub fn load(explicit: Option<&Path>) -> SnippetResult<Self> {
        debug!("Loading configuration with precedence: explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/snippetstream/snippetstream.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("snippetstream").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        Self::build(builder)
    }

    /// Bundled defaults overlaid with `toml`.
    pub fn from_toml_str(toml: &str) -> SnippetResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(toml, FileFormat::Toml));
        Self::build(builder)
    }

    /// Bundled defaults only.
    pub fn bundled() -> SnippetResult<Self> {
        Self::from_toml_str("")
    }

    fn build(builder: config::ConfigBuilder<config::builder::DefaultState>) -> SnippetResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> SnippetResult<()> {
        self.completion.retry_policy()?;
        self.fetch.fetch_config()?;
        if !self.tiers.contains_key(FALLBACK_TIER) {
            return Err(ConfigError::new(format!(
                "tiers.{} must be configured",
                FALLBACK_TIER
            ))
            .into());
        }
        Ok(())
    }

    /// Limits for every configured tier.
    pub fn tier_limits(&self) -> HashMap<String, FeatureLimits> {
        self.tiers
            .iter()
            .map(|(name, tier)| (name.clone(), tier.limits()))
            .collect()
    }

    /// Replace the bind address.
    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.server.bind = bind.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snippetstream_error::SnippetErrorKind;

    #[test]
    fn bundled_defaults_parse() {
        let config = ServiceConfig::bundled().unwrap();
        assert_eq!(config.server().bind(), "0.0.0.0:8000");
        assert_eq!(
            config.completion().models(),
            &vec!["mistral".to_string(), "openai".to_string(), "searchgpt".to_string()]
        );
        assert_eq!(*config.fetch().max_chars(), 15_000);

        let free = config.tiers()["free"].limits();
        assert_eq!(*free.max_content_length(), 5000);
        assert_eq!(*free.daily_generations(), Some(3));
        assert!(!*free.url_processing());

        let pro = config.tiers()["pro"].limits();
        assert_eq!(*pro.daily_generations(), None);
        assert!(*pro.url_processing());
    }

    #[test]
    fn overrides_replace_defaults() {
        let config = ServiceConfig::from_toml_str(
            r#"
            [completion]
            models = ["openai", "mistral", "searchgpt"]
            attempts_per_model = 3

            [[accounts]]
            api_key = "k1"
            user_id = "u1"
            "#,
        )
        .unwrap();

        let policy = config.completion().retry_policy().unwrap();
        assert_eq!(policy.models()[0], "openai");
        assert_eq!(policy.max_calls(), 9);
        assert_eq!(*config.completion().timeout_secs(), 60);

        let account = &config.accounts()[0];
        assert_eq!(account.tier(), "free");
        assert!(*account.active());
    }

    #[test]
    fn zero_attempts_is_rejected() {
        let err = ServiceConfig::from_toml_str("[completion]\nattempts_per_model = 0\n").unwrap_err();
        assert!(matches!(err.kind(), SnippetErrorKind::Builder(_)));
    }

    #[test]
    fn zero_fetch_timeout_is_rejected() {
        let err = ServiceConfig::from_toml_str("[fetch]\ntimeout_secs = 0\n").unwrap_err();
        assert!(err.to_string().contains("FetchConfig"));
    }
}
