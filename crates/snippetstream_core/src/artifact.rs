//! Platform artifacts, per-platform outcomes and their aggregate.

use crate::Platform;
use serde::{Deserialize, Serialize};

/// Number of items in every thread artifact.
pub const THREAD_LEN: usize = 10;

/// Number of slides in every carousel artifact.
pub const CAROUSEL_LEN: usize = 8;

/// Minimum non-empty lines in one carousel slide.
pub const SLIDE_MIN_LINES: usize = 2;

const THREAD_EXHAUSTED: &str = "❌ Thread generation failed";
const THREAD_TASK_FAILED: &str = "❌ Thread error";
const POST_EXHAUSTED: &str = "❌ Post generation failed";
const POST_TASK_FAILED: &str = "❌ Post error";
const CAROUSEL_EXHAUSTED: &str = "❌ Carousel generation failed\nNo slides were produced";
const CAROUSEL_TASK_FAILED: &str = "❌ Carousel error\nGeneration did not complete";

/// Why a platform produced no generated artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum FailureReason {
    /// Every (model, attempt) pair returned nothing
    #[display("completion exhausted")]
    Exhausted,
    /// The generation task itself failed
    #[display("task failed: {}", _0)]
    TaskFailed(String),
}

/// A shaped artifact for one platform.
///
/// Sequence variants always hold exactly [`THREAD_LEN`] / [`CAROUSEL_LEN`]
/// items once they leave a generator, whether generated or an error marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "platform", content = "value", rename_all = "lowercase")]
pub enum PlatformArtifact {
    /// Numbered thread items
    Thread(Vec<String>),
    /// Long-form post body
    Post(String),
    /// Carousel slides, each `title\ndescription`
    Carousel(Vec<String>),
}

impl PlatformArtifact {
    /// The platform this artifact belongs to.
    pub fn platform(&self) -> Platform {
        match self {
            PlatformArtifact::Thread(_) => Platform::Thread,
            PlatformArtifact::Post(_) => Platform::Post,
            PlatformArtifact::Carousel(_) => Platform::Carousel,
        }
    }

    /// Value reported for a platform that was not enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use snippetstream_core::{Platform, PlatformArtifact};
    ///
    /// assert_eq!(PlatformArtifact::empty(Platform::Post), PlatformArtifact::Post(String::new()));
    /// assert_eq!(PlatformArtifact::empty(Platform::Thread), PlatformArtifact::Thread(vec![]));
    /// ```
    pub fn empty(platform: Platform) -> Self {
        match platform {
            Platform::Thread => PlatformArtifact::Thread(Vec::new()),
            Platform::Post => PlatformArtifact::Post(String::new()),
            Platform::Carousel => PlatformArtifact::Carousel(Vec::new()),
        }
    }

    /// Fixed placeholder for a failed platform, in that platform's shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use snippetstream_core::{FailureReason, Platform, PlatformArtifact, THREAD_LEN};
    ///
    /// let marker = PlatformArtifact::error_marker(Platform::Thread, &FailureReason::Exhausted);
    /// assert!(marker.is_error_marker());
    /// assert_eq!(marker.item_count(), THREAD_LEN);
    /// ```
    pub fn error_marker(platform: Platform, reason: &FailureReason) -> Self {
        let exhausted = matches!(reason, FailureReason::Exhausted);
        match platform {
            Platform::Thread => {
                let line = if exhausted { THREAD_EXHAUSTED } else { THREAD_TASK_FAILED };
                PlatformArtifact::Thread(vec![line.to_string(); THREAD_LEN])
            }
            Platform::Post => {
                let body = if exhausted { POST_EXHAUSTED } else { POST_TASK_FAILED };
                PlatformArtifact::Post(body.to_string())
            }
            Platform::Carousel => {
                let slide = if exhausted {
                    CAROUSEL_EXHAUSTED
                } else {
                    CAROUSEL_TASK_FAILED
                };
                PlatformArtifact::Carousel(vec![slide.to_string(); CAROUSEL_LEN])
            }
        }
    }

    /// Whether this value is one of the fixed error markers.
    pub fn is_error_marker(&self) -> bool {
        match self {
            PlatformArtifact::Thread(items) => {
                items.len() == THREAD_LEN
                    && items
                        .iter()
                        .all(|i| i == THREAD_EXHAUSTED || i == THREAD_TASK_FAILED)
            }
            PlatformArtifact::Post(body) => body == POST_EXHAUSTED || body == POST_TASK_FAILED,
            PlatformArtifact::Carousel(slides) => {
                slides.len() == CAROUSEL_LEN
                    && slides
                        .iter()
                        .all(|s| s == CAROUSEL_EXHAUSTED || s == CAROUSEL_TASK_FAILED)
            }
        }
    }

    /// Item count for sequences, 1 for a non-empty post.
    pub fn item_count(&self) -> usize {
        match self {
            PlatformArtifact::Thread(items) | PlatformArtifact::Carousel(items) => items.len(),
            PlatformArtifact::Post(body) => usize::from(!body.is_empty()),
        }
    }
}

/// Result of one platform's generation task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformOutcome {
    /// Generation produced a shaped artifact
    Generated(PlatformArtifact),
    /// Generation failed; the platform reports its error marker
    Failed {
        /// Platform that failed
        platform: Platform,
        /// Why it failed
        reason: FailureReason,
    },
}

impl PlatformOutcome {
    /// Platform this outcome belongs to.
    pub fn platform(&self) -> Platform {
        match self {
            PlatformOutcome::Generated(artifact) => artifact.platform(),
            PlatformOutcome::Failed { platform, .. } => *platform,
        }
    }

    /// Whether generation failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, PlatformOutcome::Failed { .. })
    }

    /// The artifact to report, substituting the error marker on failure.
    pub fn into_artifact(self) -> PlatformArtifact {
        match self {
            PlatformOutcome::Generated(artifact) => artifact,
            PlatformOutcome::Failed { platform, reason } => {
                PlatformArtifact::error_marker(platform, &reason)
            }
        }
    }
}

/// Aggregated artifacts for all three platforms.
///
/// Starts with every field in its empty form; enabled platforms overwrite
/// their field as outcomes arrive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratedArtifacts {
    /// Thread items
    pub thread: Vec<String>,
    /// Post body
    pub post: String,
    /// Carousel slides
    pub carousel: Vec<String>,
}

impl GeneratedArtifacts {
    /// Store an artifact in its platform's field.
    pub fn set(&mut self, artifact: PlatformArtifact) {
        match artifact {
            PlatformArtifact::Thread(items) => self.thread = items,
            PlatformArtifact::Post(body) => self.post = body,
            PlatformArtifact::Carousel(slides) => self.carousel = slides,
        }
    }

    /// Copy out one platform's field as an artifact.
    pub fn get(&self, platform: Platform) -> PlatformArtifact {
        match platform {
            Platform::Thread => PlatformArtifact::Thread(self.thread.clone()),
            Platform::Post => PlatformArtifact::Post(self.post.clone()),
            Platform::Carousel => PlatformArtifact::Carousel(self.carousel.clone()),
        }
    }
}

impl FromIterator<PlatformOutcome> for GeneratedArtifacts {
    fn from_iter<I: IntoIterator<Item = PlatformOutcome>>(iter: I) -> Self {
        let mut artifacts = GeneratedArtifacts::default();
        for outcome in iter {
            artifacts.set(outcome.into_artifact());
        }
        artifacts
    }
}
