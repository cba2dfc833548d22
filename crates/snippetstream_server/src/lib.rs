//! SnippetStream repurpose service.
//!
//! The [`Orchestrator`] gates a request, resolves its content, fans the
//! enabled platform generators out concurrently and aggregates whatever they
//! produce. The HTTP surface in [`create_router`] exposes it together with
//! analytics tracking and a health probe.
//!
//! Default collaborators:
//! - [`ApiKeyAuthProvider`]: bearer keys from `[[accounts]]`
//! - [`TierFeatureGate`]: limits from `[tiers]`, daily usage from the store
//! - [`InMemoryGenerationStore`]: append-only records and usage events
//! - [`MarkdownCleaner`]: strips markdown markers from artifacts

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod auth;
mod cleaners;
mod cli;
mod config;
mod gate;
mod observability;
mod orchestrator;
mod service;
mod store;

pub use api::{ApiError, ApiState, SERVICE_NAME, create_router};
pub use auth::ApiKeyAuthProvider;
pub use cleaners::MarkdownCleaner;
pub use cli::{Cli, Commands};
pub use config::{
    AccountConfig, CompletionSection, FALLBACK_TIER, FetchSection, ServerSection, ServiceConfig,
    TierConfig,
};
pub use gate::{TierFeatureGate, utc_midnight};
pub use observability::{ObservabilityConfig, init_observability};
pub use orchestrator::{Collaborators, Orchestrator};
pub use service::Service;
pub use store::{InMemoryGenerationStore, StoredRecord};
