//! Trait definitions for the collaborators the orchestrator depends on.

use crate::CompletionRequest;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use snippetstream_core::{CallerIdentity, FeatureLimits, GenerationRecord, PlatformArtifact, UsageEvent};
use snippetstream_error::{AuthorizationError, CompletionError, InputError, PersistenceError, SnippetResult};

/// Transport to a chat-completion endpoint.
///
/// One call, one model, no retries: fallback policy lives above this trait.
/// Implementations must be safe to share across concurrent generation tasks.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Send one request and return the first choice's text, if any.
    ///
    /// `Ok(None)` means the endpoint answered without a usable choice.
    async fn complete(&self, request: &CompletionRequest) -> Result<Option<String>, CompletionError>;

    /// Provider name used in logs.
    fn provider_name(&self) -> &'static str;
}

/// Retrieves a page and reduces it to plain text.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` once and return its reduced text.
    ///
    /// Any failure is a client input problem: the URL was the caller's.
    async fn fetch_text(&self, url: &str) -> Result<String, InputError>;
}

/// Quota and entitlement rules applied before generation starts.
#[async_trait]
pub trait FeatureGate: Send + Sync {
    /// Whether the caller still has generations left.
    async fn can_generate(&self, caller: &CallerIdentity) -> SnippetResult<bool>;

    /// Whether the caller may submit URLs.
    async fn can_process_urls(&self, caller: &CallerIdentity) -> SnippetResult<bool>;

    /// The caller's limits.
    async fn limits(&self, caller: &CallerIdentity) -> SnippetResult<FeatureLimits>;
}

/// Append-only store for generation records and usage events.
#[async_trait]
pub trait GenerationStore: Send + Sync {
    /// Write a generation record and its usage event as one unit.
    ///
    /// Either both are stored or neither is.
    async fn record_generation(
        &self,
        record: GenerationRecord,
        event: UsageEvent,
    ) -> Result<(), PersistenceError>;

    /// Write a standalone usage event.
    async fn record_usage(&self, event: UsageEvent) -> Result<(), PersistenceError>;

    /// Count a caller's generation records created at or after `since`.
    async fn count_generations_since(
        &self,
        user_id: &str,
        since: DateTime<Utc>,
    ) -> Result<u32, PersistenceError>;
}

/// Cosmetic normalisation applied to shaped artifacts.
///
/// Contract: same variant and item count out as in.
pub trait ArtifactCleaner: Send + Sync {
    /// Clean one artifact.
    fn clean(&self, artifact: PlatformArtifact) -> PlatformArtifact;
}

/// Resolves request credentials to a caller.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Resolve a bearer credential, rejecting unknown or inactive accounts.
    async fn authenticate(&self, credential: Option<&str>) -> Result<CallerIdentity, AuthorizationError>;
}
