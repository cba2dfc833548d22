//! Caller identity and plan limits.

use serde::{Deserialize, Serialize};

/// Authenticated caller, as resolved by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct CallerIdentity {
    /// Stable account identifier
    user_id: String,
    /// Name of the plan tier the account is on
    tier: String,
}

impl CallerIdentity {
    /// Create a caller on the given tier.
    pub fn new(user_id: impl Into<String>, tier: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            tier: tier.into(),
        }
    }
}

/// Limits the feature gate applies to one caller.
///
/// # Examples
///
/// ```
/// use snippetstream_core::FeatureLimits;
///
/// let limits = FeatureLimits::new(5000, Some(3), false);
/// assert_eq!(*limits.max_content_length(), 5000);
/// assert_eq!(*limits.daily_generations(), Some(3));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct FeatureLimits {
    /// Longest content, in characters, sent to generation before truncation
    max_content_length: usize,
    /// Generations allowed per UTC day; `None` is unlimited
    daily_generations: Option<u32>,
    /// Whether URL sources may be used
    url_processing: bool,
}

impl FeatureLimits {
    /// Create a limits value.
    pub fn new(max_content_length: usize, daily_generations: Option<u32>, url_processing: bool) -> Self {
        Self {
            max_content_length,
            daily_generations,
            url_processing,
        }
    }
}
