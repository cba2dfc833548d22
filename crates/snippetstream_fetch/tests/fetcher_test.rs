//! Tests for page retrieval against a mock site.

use snippetstream_error::{BuilderError, BuilderErrorKind, InputErrorKind};
use snippetstream_fetch::{ContentFetcher, FetchConfig};
use snippetstream_interface::PageFetcher;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = r#"<html><body>
<nav>Menu</nav>
<main><h1>Devlog</h1><p>Fixed the signup bug.</p></main>
<footer>Footer</footer>
</body></html>"#;

fn fetcher() -> ContentFetcher {
    ContentFetcher::new(FetchConfig::default()).unwrap()
}

#[tokio::test]
async fn test_fetches_and_reduces_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/log"))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let text = fetcher()
        .fetch_text(&format!("{}/log", server.uri()))
        .await
        .unwrap();

    assert!(text.contains("Devlog"));
    assert!(text.contains("Fixed the signup bug."));
    assert!(!text.contains("Footer"));
}

#[tokio::test]
async fn test_truncates_to_max_chars() {
    let server = MockServer::start().await;
    let body = format!("<p>{}</p>", "a".repeat(500));
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let config = FetchConfig::builder().max_chars(100usize).build().unwrap();
    let fetcher = ContentFetcher::new(config).unwrap();
    let text = fetcher.fetch_text(&server.uri()).await.unwrap();

    assert_eq!(text.chars().count(), 100);
}

#[tokio::test]
async fn test_non_success_status_is_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let err = fetcher().fetch_text(&server.uri()).await.unwrap_err();

    assert!(matches!(err.kind, InputErrorKind::FetchFailed(_)));
}

#[tokio::test]
async fn test_timeout_is_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(PAGE)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = FetchConfig::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let err = ContentFetcher::new(config)
        .unwrap()
        .fetch_text(&server.uri())
        .await
        .unwrap_err();

    assert!(matches!(err.kind, InputErrorKind::FetchFailed(_)));
}

#[tokio::test]
async fn test_malformed_url_is_invalid() {
    let err = fetcher().fetch_text("not a url").await.unwrap_err();
    assert!(matches!(err.kind, InputErrorKind::InvalidUrl(_)));
}

#[test]
fn test_non_http_scheme_rejected() {
    assert!(ContentFetcher::parse_url("ftp://example.com/file").is_err());
    assert!(ContentFetcher::parse_url(" https://example.com/post ").is_ok());
}

#[test]
fn test_unbuildable_client_is_config_error() {
    let config = FetchConfig::builder()
        .user_agent("bad\nagent")
        .build()
        .unwrap();
    let err = ContentFetcher::new(config).unwrap_err();
    assert!(err.message.contains("fetch client"));
}

#[test]
fn test_zero_timeout_rejected_by_builder() {
    let err: BuilderError = FetchConfig::builder()
        .timeout(Duration::ZERO)
        .build()
        .unwrap_err()
        .into();
    assert!(matches!(
        err.kind,
        BuilderErrorKind::Invalid { target: "FetchConfig", .. }
    ));
}
