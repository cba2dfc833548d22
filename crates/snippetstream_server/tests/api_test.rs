//! Tests for the HTTP surface, driven in-process.

mod common;

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use common::{LOG, RoutedDriver, StubFetcher, Target, service_with, test_config};
use serde_json::{Value, json};
use snippetstream_core::{CallerIdentity, FeatureLimits};
use snippetstream_error::SnippetResult;
use snippetstream_fetch::{ContentFetcher, FetchConfig};
use snippetstream_interface::FeatureGate;
use snippetstream_models::RetryableCompletion;
use snippetstream_server::{
    ApiKeyAuthProvider, ApiState, Collaborators, InMemoryGenerationStore, MarkdownCleaner,
    Orchestrator, Service, create_router,
};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

fn post_json(uri: &str, key: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(key) = key {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", key));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn send(service: &Service, request: Request<Body>) -> (StatusCode, Value) {
    let response = service.router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health() {
    let service = service_with(RoutedDriver::answering(), StubFetcher::failing());
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let (status, body) = send(&service, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "service": "SnippetStream"}));
}

#[tokio::test]
async fn test_thread_only_end_to_end() {
    let driver = RoutedDriver::answering();
    let service = service_with(driver.clone(), StubFetcher::failing());
    let request = post_json(
        "/repurpose",
        Some("free-key"),
        json!({"content": LOG, "enabled_platforms": ["thread"]}),
    );

    let (status, body) = send(&service, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["thread"].as_array().unwrap().len(), 10);
    assert_eq!(body["post"], "");
    assert_eq!(body["carousel"], json!([]));
    assert_eq!(body["content_preview"], LOG);
    assert_eq!(driver.calls_for(Target::Thread), 1);
}

#[tokio::test]
async fn test_client_metadata_is_accepted_and_ignored() {
    let service = service_with(RoutedDriver::answering(), StubFetcher::failing());
    let request = post_json(
        "/repurpose",
        Some("pro-key"),
        json!({
            "content": LOG,
            "content_type": "markdown",
            "browser_info": {"name": "firefox"},
            "session_id": "abc",
            "timezone": "UTC",
            "screen_resolution": "1920x1080",
            "context": {"tone": "playful"}
        }),
    );

    let (status, body) = send(&service, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["carousel"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_unreachable_url_is_bad_request() {
    let config = test_config();
    let driver = RoutedDriver::answering();
    let completion = RetryableCompletion::new(driver.clone(), config.completion().retry_policy().unwrap());
    let fetcher = ContentFetcher::new(
        FetchConfig::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap(),
    )
    .unwrap();
    let service = Service::assemble(&config, completion, Arc::new(fetcher));
    let request = post_json(
        "/repurpose",
        Some("pro-key"),
        json!({"url": "http://127.0.0.1:9/devlog"}),
    );

    let (status, body) = send(&service, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().starts_with("Failed to fetch content"));
    assert_eq!(driver.calls(), 0);
    assert!(service.store().records().await.is_empty());
}

#[tokio::test]
async fn test_status_mapping() {
    let service = service_with(RoutedDriver::answering(), StubFetcher::failing());
    let cases = [
        (None, json!({"content": LOG}), StatusCode::UNAUTHORIZED),
        (Some("nope"), json!({"content": LOG}), StatusCode::UNAUTHORIZED),
        (Some("gone-key"), json!({"content": LOG}), StatusCode::FORBIDDEN),
        (
            Some("free-key"),
            json!({"url": "https://example.com/log"}),
            StatusCode::FORBIDDEN,
        ),
        (Some("pro-key"), json!({}), StatusCode::BAD_REQUEST),
        (Some("pro-key"), json!({"content": "tiny"}), StatusCode::BAD_REQUEST),
        (
            Some("pro-key"),
            json!({"content": LOG, "enabled_platforms": []}),
            StatusCode::BAD_REQUEST,
        ),
    ];

    for (key, body, expected) in cases {
        let (status, response) = send(&service, post_json("/repurpose", key, body.clone())).await;
        assert_eq!(status, expected, "request {} answered {}", body, response);
        assert!(response["detail"].is_string());
    }
}

#[tokio::test]
async fn test_limit_reached_is_too_many_requests() {
    let service = service_with(RoutedDriver::answering(), StubFetcher::failing());
    let body = json!({"content": LOG, "enabled_platforms": ["post"]});

    for _ in 0..3 {
        let (status, _) = send(&service, post_json("/repurpose", Some("free-key"), body.clone())).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, response) = send(&service, post_json("/repurpose", Some("free-key"), body)).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response["detail"], "Daily generation limit reached (3 per day)");
}

#[tokio::test]
async fn test_track_records_event() {
    let service = service_with(RoutedDriver::answering(), StubFetcher::failing());
    let request = post_json(
        "/analytics/track",
        Some("free-key"),
        json!({"action": "copy", "platform": "thread", "extra": 1}),
    );

    let (status, body) = send(&service, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "tracked"}));
    let events = service.store().events().await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].action, "copy");
    assert_eq!(events[0].platform.as_deref(), Some("thread"));
    assert_eq!(events[0].metadata["extra"], 1);
}

#[tokio::test]
async fn test_track_reports_storage_failure_in_body() {
    let service = service_with(RoutedDriver::answering(), StubFetcher::failing());
    service.store().set_reject_writes(true);

    let (status, body) = send(
        &service,
        post_json("/analytics/track", Some("free-key"), json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "error");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_malformed_body_is_bad_request_with_detail() {
    let driver = RoutedDriver::answering();
    let service = service_with(driver.clone(), StubFetcher::failing());
    let request = Request::builder()
        .method("POST")
        .uri("/repurpose")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, "Bearer free-key")
        .body(Body::from("{\"content\": "))
        .unwrap();

    let (status, body) = send(&service, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().starts_with("Invalid request body"));
    assert_eq!(driver.calls(), 0);
}

#[tokio::test]
async fn test_missing_content_type_is_bad_request_with_detail() {
    let service = service_with(RoutedDriver::answering(), StubFetcher::failing());
    let request = Request::builder()
        .method("POST")
        .uri("/analytics/track")
        .header(header::AUTHORIZATION, "Bearer free-key")
        .body(Body::from(r#"{"action": "copy"}"#))
        .unwrap();

    let (status, body) = send(&service, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

struct PanickingGate;

#[async_trait]
impl FeatureGate for PanickingGate {
    async fn can_generate(&self, _caller: &CallerIdentity) -> SnippetResult<bool> {
        panic!("quota backend unavailable");
    }

    async fn can_process_urls(&self, _caller: &CallerIdentity) -> SnippetResult<bool> {
        Ok(true)
    }

    async fn limits(&self, _caller: &CallerIdentity) -> SnippetResult<FeatureLimits> {
        Ok(FeatureLimits::new(15_000, None, true))
    }
}

#[tokio::test]
async fn test_panic_inside_request_is_generic_server_error() {
    let config = test_config();
    let driver = RoutedDriver::answering();
    let completion =
        RetryableCompletion::new(driver.clone(), config.completion().retry_policy().unwrap());
    let collaborators = Collaborators {
        fetcher: StubFetcher::failing(),
        gate: Arc::new(PanickingGate),
        store: Arc::new(InMemoryGenerationStore::new()),
        cleaner: Arc::new(MarkdownCleaner),
    };
    let orchestrator = Arc::new(Orchestrator::new(completion, collaborators));
    let auth = Arc::new(ApiKeyAuthProvider::new(config.accounts().iter().cloned()));
    let router = create_router(ApiState::new(orchestrator, auth));

    let request = post_json("/repurpose", Some("pro-key"), json!({"content": LOG}));
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "Server Error"}));
    assert_eq!(driver.calls(), 0);
}
