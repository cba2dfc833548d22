//! Response returned to repurpose callers.

use crate::GeneratedArtifacts;
use serde::{Deserialize, Serialize};

/// Final response of a repurpose call.
///
/// Fields of disabled platforms hold their empty form; fields of enabled
/// platforms are never empty, holding either the artifact or its error marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepurposeResponse {
    /// Thread items (10 when enabled)
    pub thread: Vec<String>,
    /// Post body
    pub post: String,
    /// Carousel slides (8 when enabled)
    pub carousel: Vec<String>,
    /// First 200 characters of the content actually used
    pub content_preview: String,
}

impl RepurposeResponse {
    /// Combine aggregated artifacts with the content preview.
    pub fn new(artifacts: GeneratedArtifacts, content_preview: impl Into<String>) -> Self {
        Self {
            thread: artifacts.thread,
            post: artifacts.post,
            carousel: artifacts.carousel,
            content_preview: content_preview.into(),
        }
    }
}
