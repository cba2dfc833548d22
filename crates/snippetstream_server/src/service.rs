//! Wiring configuration into a running service.

use crate::{
    ApiKeyAuthProvider, ApiState, Collaborators, InMemoryGenerationStore, MarkdownCleaner,
    Orchestrator, ServiceConfig, TierFeatureGate, create_router,
};
use axum::Router;
use snippetstream_error::SnippetResult;
use snippetstream_fetch::ContentFetcher;
use snippetstream_interface::{CompletionDriver, PageFetcher};
use snippetstream_models::{CompletionClient, RetryableCompletion};
use std::sync::Arc;
use tracing::info;

/// The assembled service and the default collaborators behind it.
#[derive(Clone)]
pub struct Service {
    orchestrator: Arc<Orchestrator>,
    store: Arc<InMemoryGenerationStore>,
    auth: Arc<ApiKeyAuthProvider>,
}

impl Service {
    /// Build the service, creating the completion client from the environment.
    ///
    /// Fails when `COMPLETION_API_KEY` is missing.
    pub fn from_config(config: &ServiceConfig) -> SnippetResult<Self> {
        let client = CompletionClient::new(config.completion().client_config_from_env()?)?;
        info!(base_url = %client.config().base_url, "Created completion client");
        Self::with_driver(config, Arc::new(client))
    }

    /// Build the service over an explicit completion driver.
    pub fn with_driver(
        config: &ServiceConfig,
        driver: Arc<dyn CompletionDriver>,
    ) -> SnippetResult<Self> {
        let completion = RetryableCompletion::new(driver, config.completion().retry_policy()?);
        let fetcher = ContentFetcher::new(config.fetch().fetch_config()?)?;
        Ok(Self::assemble(config, completion, Arc::new(fetcher)))
    }

    /// Build the service from already-constructed parts.
    pub fn assemble(
        config: &ServiceConfig,
        completion: RetryableCompletion,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Self {
        let store = Arc::new(InMemoryGenerationStore::new());
        let gate = TierFeatureGate::new(config.tier_limits(), store.clone());
        let collaborators = Collaborators {
            fetcher,
            gate: Arc::new(gate),
            store: store.clone(),
            cleaner: Arc::new(MarkdownCleaner),
        };
        let auth = Arc::new(ApiKeyAuthProvider::new(config.accounts().iter().cloned()));
        info!(accounts = auth.len(), "Loaded API accounts");

        Self {
            orchestrator: Arc::new(Orchestrator::new(completion, collaborators)),
            store,
            auth,
        }
    }

    /// The orchestrator.
    pub fn orchestrator(&self) -> &Arc<Orchestrator> {
        &self.orchestrator
    }

    /// The in-memory store.
    pub fn store(&self) -> &Arc<InMemoryGenerationStore> {
        &self.store
    }

    /// HTTP router over this service.
    pub fn router(&self) -> Router {
        create_router(ApiState::new(self.orchestrator.clone(), self.auth.clone()))
    }
}
