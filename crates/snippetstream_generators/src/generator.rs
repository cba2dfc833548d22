//! The per-platform generators.

use crate::{CAROUSEL_PROMPT, POST_PROMPT, shape_carousel, shape_thread, thread_prompt};
use async_trait::async_trait;
use snippetstream_core::{
    FailureReason, PersonalizationContext, Platform, PlatformArtifact, PlatformOutcome, PromptPair,
};
use snippetstream_models::{CompletionOutcome, RetryableCompletion};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Output budget for a thread.
pub const THREAD_MAX_TOKENS: u32 = 2000;

/// Output budget for a post.
pub const POST_MAX_TOKENS: u32 = 1500;

/// Output budget for a carousel.
pub const CAROUSEL_MAX_TOKENS: u32 = 1500;

/// Produces one platform's artifact from resolved content.
///
/// Implementations never fail outright: an exhausted completion becomes
/// [`PlatformOutcome::Failed`] so sibling platforms are unaffected.
#[async_trait]
pub trait PlatformGenerator: Send + Sync {
    /// Platform this generator serves.
    fn platform(&self) -> Platform;

    /// Generate and shape the artifact.
    async fn generate(
        &self,
        content: &str,
        context: Option<&PersonalizationContext>,
    ) -> PlatformOutcome;
}

async fn run(
    completion: &RetryableCompletion,
    platform: Platform,
    prompt: PromptPair,
    max_tokens: u32,
    shape: impl FnOnce(String) -> PlatformArtifact,
) -> PlatformOutcome {
    match completion.complete(&prompt, max_tokens).await {
        CompletionOutcome::Success(text) => {
            let artifact = shape(text);
            info!(%platform, items = artifact.item_count(), "Generated artifact");
            PlatformOutcome::Generated(artifact)
        }
        CompletionOutcome::Exhausted => {
            warn!(%platform, "Generation exhausted every model");
            PlatformOutcome::Failed {
                platform,
                reason: FailureReason::Exhausted,
            }
        }
    }
}

/// Ten-item numbered thread.
#[derive(Debug, Clone)]
pub struct ThreadGenerator {
    completion: RetryableCompletion,
}

impl ThreadGenerator {
    /// Create a thread generator.
    pub fn new(completion: RetryableCompletion) -> Self {
        Self { completion }
    }
}

#[async_trait]
impl PlatformGenerator for ThreadGenerator {
    fn platform(&self) -> Platform {
        Platform::Thread
    }

    #[instrument(skip_all, fields(platform = "thread"))]
    async fn generate(
        &self,
        content: &str,
        context: Option<&PersonalizationContext>,
    ) -> PlatformOutcome {
        let prompt = PromptPair::new(thread_prompt(context), content);
        run(&self.completion, Platform::Thread, prompt, THREAD_MAX_TOKENS, |text| {
            PlatformArtifact::Thread(shape_thread(&text))
        })
        .await
    }
}

/// Single long-form post.
#[derive(Debug, Clone)]
pub struct PostGenerator {
    completion: RetryableCompletion,
}

impl PostGenerator {
    /// Create a post generator.
    pub fn new(completion: RetryableCompletion) -> Self {
        Self { completion }
    }
}

#[async_trait]
impl PlatformGenerator for PostGenerator {
    fn platform(&self) -> Platform {
        Platform::Post
    }

    // Context is accepted but not yet applied to this prompt.
    #[instrument(skip_all, fields(platform = "post"))]
    async fn generate(
        &self,
        content: &str,
        _context: Option<&PersonalizationContext>,
    ) -> PlatformOutcome {
        let prompt = PromptPair::new(POST_PROMPT, content);
        run(
            &self.completion,
            Platform::Post,
            prompt,
            POST_MAX_TOKENS,
            PlatformArtifact::Post,
        )
        .await
    }
}

/// Eight-slide carousel script.
#[derive(Debug, Clone)]
pub struct CarouselGenerator {
    completion: RetryableCompletion,
}

impl CarouselGenerator {
    /// Create a carousel generator.
    pub fn new(completion: RetryableCompletion) -> Self {
        Self { completion }
    }
}

#[async_trait]
impl PlatformGenerator for CarouselGenerator {
    fn platform(&self) -> Platform {
        Platform::Carousel
    }

    // Context is accepted but not yet applied to this prompt.
    #[instrument(skip_all, fields(platform = "carousel"))]
    async fn generate(
        &self,
        content: &str,
        _context: Option<&PersonalizationContext>,
    ) -> PlatformOutcome {
        let prompt = PromptPair::new(CAROUSEL_PROMPT, content);
        run(
            &self.completion,
            Platform::Carousel,
            prompt,
            CAROUSEL_MAX_TOKENS,
            |text| PlatformArtifact::Carousel(shape_carousel(&text)),
        )
        .await
    }
}

/// The generator for `platform`, sharing `completion`.
pub fn generator_for(
    platform: Platform,
    completion: RetryableCompletion,
) -> Arc<dyn PlatformGenerator> {
    match platform {
        Platform::Thread => Arc::new(ThreadGenerator::new(completion)),
        Platform::Post => Arc::new(PostGenerator::new(completion)),
        Platform::Carousel => Arc::new(CarouselGenerator::new(completion)),
    }
}
