//! Core data types for SnippetStream.
//!
//! This crate holds the request, content, artifact and record types shared by
//! the generators, the orchestrator and the persistence collaborator.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifact;
mod caller;
mod content;
mod context;
mod message;
mod platform;
mod record;
mod request;
mod response;
mod role;

pub use artifact::{
    CAROUSEL_LEN, FailureReason, GeneratedArtifacts, PlatformArtifact, PlatformOutcome,
    SLIDE_MIN_LINES, THREAD_LEN,
};
pub use caller::{CallerIdentity, FeatureLimits};
pub use content::{ContentSource, ELLIPSIS, MIN_CONTENT_CHARS, PREVIEW_CHARS, ResolvedContent};
pub use context::{PersonalizationContext, PersonalizationContextBuilder};
pub use message::{Message, PromptPair};
pub use platform::{EnabledPlatforms, Platform};
pub use record::{GENERATE_ACTION, GenerationRecord, RECORD_CONTENT_CHARS, UsageEvent};
pub use request::{GenerationRequest, RequestedSource};
pub use response::RepurposeResponse;
pub use role::Role;
