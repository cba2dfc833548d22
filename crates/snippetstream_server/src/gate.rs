//! Tier-based feature gate.

use crate::FALLBACK_TIER;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use snippetstream_core::{CallerIdentity, FeatureLimits};
use snippetstream_error::{ConfigError, SnippetResult};
use snippetstream_interface::{FeatureGate, GenerationStore};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Start of the current UTC day.
pub fn utc_midnight(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc())
        .unwrap_or(now)
}

/// Applies per-tier limits, counting today's generations from the store.
///
/// Callers on a tier with no configuration get the `free` tier's limits.
#[derive(Clone)]
pub struct TierFeatureGate {
    tiers: HashMap<String, FeatureLimits>,
    store: Arc<dyn GenerationStore>,
}

impl std::fmt::Debug for TierFeatureGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TierFeatureGate")
            .field("tiers", &self.tiers)
            .finish_non_exhaustive()
    }
}

impl TierFeatureGate {
    /// Create a gate over `tiers`, counting usage in `store`.
    pub fn new(tiers: HashMap<String, FeatureLimits>, store: Arc<dyn GenerationStore>) -> Self {
        Self { tiers, store }
    }

    fn limits_for(&self, caller: &CallerIdentity) -> SnippetResult<FeatureLimits> {
        if let Some(limits) = self.tiers.get(caller.tier()) {
            return Ok(*limits);
        }
        warn!(tier = %caller.tier(), "Unknown tier, applying {} limits", FALLBACK_TIER);
        self.tiers.get(FALLBACK_TIER).copied().ok_or_else(|| {
            ConfigError::new(format!("tier '{}' is not configured", FALLBACK_TIER)).into()
        })
    }
}

#[async_trait]
impl FeatureGate for TierFeatureGate {
    #[instrument(skip(self), fields(user_id = %caller.user_id()))]
    async fn can_generate(&self, caller: &CallerIdentity) -> SnippetResult<bool> {
        let limits = self.limits_for(caller)?;
        let Some(limit) = *limits.daily_generations() else {
            return Ok(true);
        };
        let used = self
            .store
            .count_generations_since(caller.user_id(), utc_midnight(Utc::now()))
            .await?;
        debug!(used, limit, "Checked daily generation count");
        Ok(used < limit)
    }

    async fn can_process_urls(&self, caller: &CallerIdentity) -> SnippetResult<bool> {
        Ok(*self.limits_for(caller)?.url_processing())
    }

    async fn limits(&self, caller: &CallerIdentity) -> SnippetResult<FeatureLimits> {
        self.limits_for(caller)
    }
}
