//! Tests for the completion HTTP client against a mock endpoint.

use snippetstream_core::PromptPair;
use snippetstream_error::CompletionErrorKind;
use snippetstream_interface::{CompletionDriver, CompletionRequest};
use snippetstream_models::{CompletionClient, CompletionConfig};
use wiremock::matchers::{bearer_token, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request() -> CompletionRequest {
    let prompt = PromptPair::new("Write a post.", "Morning: [x] shipped login");
    CompletionRequest::new("mistral", &prompt, 1500)
}

async fn client_for(server: &MockServer) -> CompletionClient {
    CompletionClient::new(CompletionConfig::new(server.uri(), "test-key")).unwrap()
}

#[tokio::test]
async fn test_returns_first_choice_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(bearer_token("test-key"))
        .and(body_partial_json(serde_json::json!({
            "model": "mistral",
            "max_tokens": 1500,
            "messages": [
                {"role": "system", "content": "Write a post."},
                {"role": "user", "content": "Morning: [x] shipped login"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "cmpl-1",
            "model": "mistral",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Shipped login today."}, "finish_reason": "stop"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let text = client.complete(&request()).await.unwrap();

    assert_eq!(text.as_deref(), Some("Shipped login today."));
}

#[tokio::test]
async fn test_null_content_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;

    assert_eq!(client.complete(&request()).await.unwrap(), None);
}

#[tokio::test]
async fn test_no_choices_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;

    assert_eq!(client.complete(&request()).await.unwrap(), None);
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.complete(&request()).await.unwrap_err();

    match err.kind {
        CompletionErrorKind::Status {
            status_code,
            ref message,
        } => {
            assert_eq!(status_code, 503);
            assert_eq!(message, "overloaded");
        }
        ref other => panic!("unexpected error kind: {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.complete(&request()).await.unwrap_err();

    assert!(matches!(err.kind, CompletionErrorKind::Deserialization(_)));
}

#[test]
fn test_empty_key_is_rejected() {
    let result = CompletionClient::new(CompletionConfig::new("http://localhost", "  "));
    assert!(result.is_err());
}
