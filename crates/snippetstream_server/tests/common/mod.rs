//! Shared mocks for server tests.

#![allow(dead_code)]

use async_trait::async_trait;
use snippetstream_error::{CompletionError, InputError, InputErrorKind};
use snippetstream_generators::{CAROUSEL_PROMPT, POST_PROMPT, THREAD_PROMPT};
use snippetstream_interface::{CompletionDriver, CompletionRequest, PageFetcher};
use snippetstream_models::RetryableCompletion;
use snippetstream_server::{Service, ServiceConfig};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const LOG: &str = "Morning: [x] shipped login, [ ] fix tests. Evening: exhausted but proud.";

pub const THREAD_ANSWER: &str = "1/10 Shipped login today.\n2/10 Tests are still red.\n3/10 Tired but proud.";
pub const POST_ANSWER: &str = "Building a startup is mostly unfinished work.\n\n#buildinpublic #startups #founders";
pub const CAROUSEL_ANSWER: &str = "🔥 **DAY 12**\nShipped login\n\n✅ DONE\nLogin page\n\n🧪 NOT DONE\nFix tests";

/// Test configuration: no backoff, a tiny tier and three accounts.
pub const TEST_CONFIG: &str = r#"
[completion]
backoff_ms = 0

[tiers.tiny]
max_content_length = 50
url_processing = true

[[accounts]]
api_key = "free-key"
user_id = "free-user"
tier = "free"

[[accounts]]
api_key = "pro-key"
user_id = "pro-user"
tier = "pro"

[[accounts]]
api_key = "gone-key"
user_id = "gone-user"
tier = "pro"
active = false
"#;

/// Platform a request was meant for, judged by its system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Thread,
    Post,
    Carousel,
}

pub fn target_of(request: &CompletionRequest) -> Target {
    let system = &request.messages()[0].content;
    if system.starts_with(THREAD_PROMPT) {
        Target::Thread
    } else if system.starts_with(POST_PROMPT) {
        Target::Post
    } else if system.starts_with(CAROUSEL_PROMPT) {
        Target::Carousel
    } else {
        panic!("unrecognised system prompt");
    }
}

/// Completion driver answering per platform and recording every request.
#[derive(Debug)]
pub struct RoutedDriver {
    thread: Option<&'static str>,
    post: Option<&'static str>,
    carousel: Option<&'static str>,
    requests: Mutex<Vec<(Target, CompletionRequest)>>,
}

impl RoutedDriver {
    pub fn new(
        thread: Option<&'static str>,
        post: Option<&'static str>,
        carousel: Option<&'static str>,
    ) -> Arc<Self> {
        Arc::new(Self {
            thread,
            post,
            carousel,
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Every platform answers.
    pub fn answering() -> Arc<Self> {
        Self::new(Some(THREAD_ANSWER), Some(POST_ANSWER), Some(CAROUSEL_ANSWER))
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn calls_for(&self, target: Target) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| *t == target)
            .count()
    }

    pub fn requests_for(&self, target: Target) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| *t == target)
            .map(|(_, r)| r.clone())
            .collect()
    }
}

#[async_trait]
impl CompletionDriver for RoutedDriver {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<Option<String>, CompletionError> {
        let target = target_of(request);
        self.requests.lock().unwrap().push((target, request.clone()));
        let answer = match target {
            Target::Thread => self.thread,
            Target::Post => self.post,
            Target::Carousel => self.carousel,
        };
        Ok(answer.map(str::to_string))
    }

    fn provider_name(&self) -> &'static str {
        "routed"
    }
}

/// Page fetcher returning a fixed result and counting calls.
#[derive(Debug)]
pub struct StubFetcher {
    page: Option<String>,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub fn serving(page: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            page: Some(page.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            page: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch_text(&self, _url: &str) -> Result<String, InputError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.page.clone().ok_or_else(|| {
            InputError::new(InputErrorKind::FetchFailed("HTTP error 404 Not Found".to_string()))
        })
    }
}

pub fn test_config() -> ServiceConfig {
    ServiceConfig::from_toml_str(TEST_CONFIG).unwrap()
}

pub fn service_with(driver: Arc<RoutedDriver>, fetcher: Arc<dyn PageFetcher>) -> Service {
    let config = test_config();
    let completion = RetryableCompletion::new(driver, config.completion().retry_policy().unwrap());
    Service::assemble(&config, completion, fetcher)
}
