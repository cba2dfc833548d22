//! Trait definitions for SnippetStream.
//!
//! The orchestrator depends only on these traits, so every network service
//! and store can be swapped for a test double.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{
    ArtifactCleaner, AuthProvider, CompletionDriver, FeatureGate, GenerationStore, PageFetcher,
};
pub use types::{CompletionRequest, CompletionRequestBuilder};
