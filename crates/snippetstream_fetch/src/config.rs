//! Settings for page retrieval.

use snippetstream_error::{BuilderError, BuilderErrorKind};
use std::time::Duration;

/// Fetch settings.
///
/// # Examples
///
/// ```
/// use snippetstream_fetch::FetchConfig;
/// use std::time::Duration;
///
/// let config = FetchConfig::builder()
///     .timeout(Duration::from_secs(3))
///     .build()
///     .unwrap();
/// assert_eq!(*config.max_chars(), 15_000);
/// assert_eq!(config.user_agent(), "Mozilla/5.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct FetchConfig {
    /// Timeout for the single retrieval attempt
    #[builder(default = "Duration::from_secs(10)")]
    timeout: Duration,
    /// Maximum characters of reduced text kept
    #[builder(default = "15_000")]
    max_chars: usize,
    /// Browser-like identification string
    #[builder(default = "\"Mozilla/5.0\".to_string()")]
    user_agent: String,
}

impl FetchConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.timeout == Some(Duration::ZERO) {
            return Err("timeout must be non-zero".to_string());
        }
        if self.max_chars == Some(0) {
            return Err("max_chars must be at least 1".to_string());
        }
        Ok(())
    }
}

impl From<FetchConfigBuilderError> for BuilderError {
    #[track_caller]
    fn from(err: FetchConfigBuilderError) -> Self {
        let kind = match err {
            FetchConfigBuilderError::UninitializedField(field) => BuilderErrorKind::MissingField {
                target: "FetchConfig",
                field,
            },
            other => BuilderErrorKind::Invalid {
                target: "FetchConfig",
                reason: other.to_string(),
            },
        };
        BuilderError::new(kind)
    }
}

impl FetchConfig {
    /// Creates a new config builder.
    pub fn builder() -> FetchConfigBuilder {
        FetchConfigBuilder::default()
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_chars: 15_000,
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}
