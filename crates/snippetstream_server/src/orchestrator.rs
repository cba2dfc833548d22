//! Repurpose orchestration: gate, resolve, fan out, aggregate, persist.

use futures::future::join_all;
use snippetstream_core::{
    CallerIdentity, ContentSource, EnabledPlatforms, FailureReason, FeatureLimits,
    GeneratedArtifacts, GenerationRecord, GenerationRequest, PersonalizationContext, Platform,
    PlatformOutcome, RepurposeResponse, RequestedSource, ResolvedContent, UsageEvent,
};
use snippetstream_error::{
    AuthorizationError, AuthorizationErrorKind, InputError, InputErrorKind, SnippetResult,
};
use snippetstream_generators::{PlatformGenerator, generator_for};
use snippetstream_interface::{ArtifactCleaner, FeatureGate, GenerationStore, PageFetcher};
use snippetstream_models::RetryableCompletion;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, warn};

/// Collaborators the orchestrator consults on every request.
#[derive(Clone)]
pub struct Collaborators {
    /// Retrieves URL sources
    pub fetcher: Arc<dyn PageFetcher>,
    /// Quota and entitlement rules
    pub gate: Arc<dyn FeatureGate>,
    /// Generation records and usage events
    pub store: Arc<dyn GenerationStore>,
    /// Post-shaping cleanup
    pub cleaner: Arc<dyn ArtifactCleaner>,
}

/// Drives one repurpose request from gate checks to response.
#[derive(Clone)]
pub struct Orchestrator {
    generators: HashMap<Platform, Arc<dyn PlatformGenerator>>,
    collaborators: Collaborators,
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut platforms: Vec<_> = self.generators.keys().collect();
        platforms.sort();
        f.debug_struct("Orchestrator")
            .field("platforms", &platforms)
            .finish_non_exhaustive()
    }
}

impl Orchestrator {
    /// One generator per platform, all sharing `completion`.
    pub fn new(completion: RetryableCompletion, collaborators: Collaborators) -> Self {
        let generators = Platform::all()
            .into_iter()
            .map(|platform| (platform, generator_for(platform, completion.clone())))
            .collect();
        Self {
            generators,
            collaborators,
        }
    }

    /// Replace the generator for its platform.
    pub fn with_generator(mut self, generator: Arc<dyn PlatformGenerator>) -> Self {
        self.generators.insert(generator.platform(), generator);
        self
    }

    /// The generation store.
    pub fn store(&self) -> &Arc<dyn GenerationStore> {
        &self.collaborators.store
    }

    /// Run a repurpose request for `caller`.
    ///
    /// Input and authorization failures return before any generation task is
    /// dispatched. Once fan-out starts the call always succeeds: failed
    /// platforms carry their error markers and persistence failures are
    /// logged and dropped.
    #[instrument(skip(self, request), fields(user_id = %caller.user_id()))]
    pub async fn repurpose(
        &self,
        caller: &CallerIdentity,
        request: &GenerationRequest,
    ) -> SnippetResult<RepurposeResponse> {
        let limits = self.check_entitlements(caller, request).await?;

        let platforms = request.platforms()?;
        if platforms.is_empty() {
            return Err(InputError::new(InputErrorKind::NoPlatforms).into());
        }

        let mut content = self.resolve_content(request).await?;
        let original_len = content.len();
        if content.truncate_to(*limits.max_content_length()) {
            info!(
                from = original_len,
                to = *limits.max_content_length(),
                "Truncated content to tier maximum"
            );
        }
        let preview = content.preview();

        info!(
            source = %content.source(),
            length = content.len(),
            platforms = platforms.len(),
            "Processing repurpose request"
        );
        let started = Instant::now();
        let artifacts = self
            .fan_out(&content, &platforms, request.context.as_ref())
            .await;
        let elapsed = started.elapsed();
        info!(seconds = elapsed.as_secs_f64(), "Fan-out complete");

        self.persist(caller, &content, &artifacts, request.context.as_ref(), elapsed)
            .await;

        Ok(RepurposeResponse::new(artifacts, preview))
    }

    async fn check_entitlements(
        &self,
        caller: &CallerIdentity,
        request: &GenerationRequest,
    ) -> SnippetResult<FeatureLimits> {
        let gate = &self.collaborators.gate;
        let limits = gate.limits(caller).await?;

        if !gate.can_generate(caller).await? {
            let limit = (*limits.daily_generations()).unwrap_or_default();
            warn!(limit, "Daily generation limit reached");
            return Err(AuthorizationError::new(
                AuthorizationErrorKind::GenerationLimitReached { limit },
            )
            .into());
        }

        if request.wants_url() && !gate.can_process_urls(caller).await? {
            warn!("URL processing not entitled");
            return Err(
                AuthorizationError::new(AuthorizationErrorKind::UrlProcessingNotEntitled).into(),
            );
        }

        Ok(limits)
    }

    async fn resolve_content(&self, request: &GenerationRequest) -> SnippetResult<ResolvedContent> {
        let resolved = match request.requested_source() {
            Some(RequestedSource::Url(url)) => {
                debug!(%url, "Fetching content from URL");
                let text = self.collaborators.fetcher.fetch_text(url).await?;
                ResolvedContent::new(text, ContentSource::Url)?
            }
            Some(RequestedSource::Text(text)) => ResolvedContent::new(text, ContentSource::Text)?,
            None => return Err(InputError::new(InputErrorKind::MissingContent).into()),
        };
        Ok(resolved)
    }

    /// Run every enabled generator concurrently and settle all of them.
    ///
    /// A task that panics is reported as that platform's failure; it never
    /// disturbs the other tasks.
    async fn fan_out(
        &self,
        content: &ResolvedContent,
        platforms: &EnabledPlatforms,
        context: Option<&PersonalizationContext>,
    ) -> GeneratedArtifacts {
        let content: Arc<str> = Arc::from(content.text());

        let tasks: Vec<(Platform, tokio::task::JoinHandle<PlatformOutcome>)> = platforms
            .iter()
            .filter_map(|platform| {
                let Some(generator) = self.generators.get(&platform).cloned() else {
                    error!(%platform, "No generator registered");
                    return None;
                };
                let content = Arc::clone(&content);
                let context = context.cloned();
                let handle = tokio::spawn(async move {
                    generator.generate(&content, context.as_ref()).await
                });
                Some((platform, handle))
            })
            .collect();

        let (names, handles): (Vec<Platform>, Vec<_>) = tasks.into_iter().unzip();
        let results = join_all(handles).await;

        let cleaner = &self.collaborators.cleaner;
        names
            .into_iter()
            .zip(results)
            .map(|(platform, result)| match result {
                Ok(PlatformOutcome::Generated(artifact)) => {
                    PlatformOutcome::Generated(cleaner.clean(artifact))
                }
                Ok(failed) => failed,
                Err(e) => {
                    error!(%platform, error = %e, "Generation task failed");
                    PlatformOutcome::Failed {
                        platform,
                        reason: FailureReason::TaskFailed(e.to_string()),
                    }
                }
            })
            .inspect(|outcome| {
                if outcome.is_failure() {
                    warn!(platform = %outcome.platform(), "Platform degraded to error marker");
                }
            })
            .collect()
    }

    async fn persist(
        &self,
        caller: &CallerIdentity,
        content: &ResolvedContent,
        artifacts: &GeneratedArtifacts,
        context: Option<&PersonalizationContext>,
        elapsed: Duration,
    ) {
        let record = match GenerationRecord::new(caller, content, artifacts, context, elapsed) {
            Ok(record) => record,
            Err(e) => {
                error!(error = %e, "Failed to build generation record");
                return;
            }
        };
        let event = UsageEvent::generation(caller, content.source(), elapsed);

        if let Err(e) = self
            .collaborators
            .store
            .record_generation(record, event)
            .await
        {
            error!(error = %e, "Failed to persist generation");
        }
    }
}
