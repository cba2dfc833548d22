//! Single-attempt page retrieval.

use crate::{FetchConfig, reduce_html};
use async_trait::async_trait;
use snippetstream_error::{ConfigError, InputError, InputErrorKind};
use snippetstream_interface::PageFetcher;
use tracing::{debug, instrument, warn};

/// Fetches a URL once and reduces the page to readable text.
///
/// There are no retries: a failure is reported to the caller as bad input.
#[derive(Debug, Clone)]
pub struct ContentFetcher {
    config: FetchConfig,
    client: reqwest::Client,
}

impl ContentFetcher {
    /// Build a fetcher with its own HTTP client.
    ///
    /// A client that cannot be built (for example an invalid user agent) is a
    /// startup configuration problem.
    pub fn new(config: FetchConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(*config.timeout())
            .user_agent(config.user_agent().as_str())
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to create fetch client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Fetch settings in use.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Validate a caller-supplied URL.
    ///
    /// Only absolute `http`/`https` URLs are accepted.
    pub fn parse_url(raw: &str) -> Result<url::Url, InputError> {
        let parsed = url::Url::parse(raw.trim())
            .map_err(|_| InputError::new(InputErrorKind::InvalidUrl(raw.to_string())))?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            _ => Err(InputError::new(InputErrorKind::InvalidUrl(raw.to_string()))),
        }
    }

    /// Fetch `url` and return the raw body.
    #[instrument(skip(self))]
    pub async fn fetch_raw(&self, url: &str) -> Result<String, InputError> {
        let parsed = Self::parse_url(url)?;

        let response = self.client.get(parsed).send().await.map_err(|e| {
            warn!(error = %e, "URL fetch failed");
            InputError::new(InputErrorKind::FetchFailed(e.to_string()))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "URL returned non-success status");
            return Err(InputError::new(InputErrorKind::FetchFailed(format!(
                "HTTP error {}",
                status
            ))));
        }

        response.text().await.map_err(|e| {
            InputError::new(InputErrorKind::FetchFailed(format!(
                "Failed to read response body: {}",
                e
            )))
        })
    }
}

#[async_trait]
impl PageFetcher for ContentFetcher {
    #[instrument(skip(self))]
    async fn fetch_text(&self, url: &str) -> Result<String, InputError> {
        let body = self.fetch_raw(url).await?;
        let text = reduce_html(&body, *self.config.max_chars());
        debug!(chars = text.chars().count(), "Reduced page to text");
        Ok(text)
    }
}
