//! Append-only records handed to the persistence collaborator.

use crate::{CallerIdentity, ContentSource, GeneratedArtifacts, PersonalizationContext, ResolvedContent};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use snippetstream_error::JsonError;
use std::time::Duration;

/// Characters of the resolved content kept in a generation record.
pub const RECORD_CONTENT_CHARS: usize = 1000;

/// Action tag of the usage event written alongside each generation.
pub const GENERATE_ACTION: &str = "generate";

/// One completed fan-out. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Caller that requested the generation
    pub user_id: String,
    /// Head of the content that was generated from
    pub original_content: String,
    /// Where the content came from
    pub content_source: ContentSource,
    /// Thread items as a JSON array
    pub thread: String,
    /// Post body
    pub post: String,
    /// Carousel slides as a JSON array
    pub carousel: String,
    /// Personalization context as JSON, when supplied
    pub context: Option<String>,
    /// Wall-clock fan-out duration in seconds
    pub processing_time: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl GenerationRecord {
    /// Snapshot a finished generation.
    pub fn new(
        caller: &CallerIdentity,
        content: &ResolvedContent,
        artifacts: &GeneratedArtifacts,
        context: Option<&PersonalizationContext>,
        processing_time: Duration,
    ) -> Result<Self, JsonError> {
        Ok(Self {
            user_id: caller.user_id().clone(),
            original_content: content.head(RECORD_CONTENT_CHARS),
            content_source: content.source(),
            thread: serde_json::to_string(&artifacts.thread)?,
            post: artifacts.post.clone(),
            carousel: serde_json::to_string(&artifacts.carousel)?,
            context: context.map(serde_json::to_string).transpose()?,
            processing_time: processing_time.as_secs_f64(),
            created_at: Utc::now(),
        })
    }
}

/// A usage analytics event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEvent {
    /// Caller the event belongs to
    pub user_id: String,
    /// Action tag
    pub action: String,
    /// Platform the action concerned, if any
    pub platform: Option<String>,
    /// Free-form metadata
    pub metadata: serde_json::Value,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl UsageEvent {
    /// Event recorded alongside a generation record.
    pub fn generation(caller: &CallerIdentity, source: ContentSource, processing_time: Duration) -> Self {
        Self {
            user_id: caller.user_id().clone(),
            action: GENERATE_ACTION.to_string(),
            platform: None,
            metadata: json!({
                "source": source,
                "processing_time": processing_time.as_secs_f64(),
            }),
            created_at: Utc::now(),
        }
    }

    /// Event built from a client analytics payload.
    ///
    /// `action` and `platform` are read from the payload; the whole payload is
    /// kept as metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// use snippetstream_core::{CallerIdentity, UsageEvent};
    /// use serde_json::json;
    ///
    /// let caller = CallerIdentity::new("user-1", "free");
    /// let event = UsageEvent::tracked(&caller, json!({"platform": "thread"}));
    /// assert_eq!(event.action, "unknown");
    /// assert_eq!(event.platform.as_deref(), Some("thread"));
    /// ```
    pub fn tracked(caller: &CallerIdentity, payload: serde_json::Value) -> Self {
        let field = |name: &str| payload.get(name).and_then(|v| v.as_str()).map(str::to_string);
        Self {
            user_id: caller.user_id().clone(),
            action: field("action").unwrap_or_else(|| "unknown".to_string()),
            platform: field("platform"),
            metadata: payload,
            created_at: Utc::now(),
        }
    }
}
