use snippetstream_core::{GenerationRequest, Platform, RequestedSource};
use snippetstream_error::InputErrorKind;

#[test]
fn test_request_deserializes_with_defaults() {
    let request: GenerationRequest =
        serde_json::from_str(r#"{"content": "Morning: [x] shipped login"}"#).unwrap();

    assert_eq!(request.content_type, "markdown");
    assert!(request.enabled_platforms.is_none());
    assert_eq!(request.platforms().unwrap().len(), 3);
}

#[test]
fn test_request_ignores_client_metadata() {
    let request: GenerationRequest = serde_json::from_str(
        r#"{
            "content": "Morning: [x] shipped login",
            "browser_info": {"name": "firefox"},
            "session_id": "abc",
            "timezone": "Europe/Berlin",
            "screen_resolution": "1920x1080",
            "enabled_platforms": ["linkedin"]
        }"#,
    )
    .unwrap();

    let platforms = request.platforms().unwrap();
    assert!(platforms.contains(Platform::Post));
    assert_eq!(platforms.len(), 1);
}

#[test]
fn test_url_takes_precedence_over_content() {
    let request = GenerationRequest::from_text("inline log text").with_url(" https://example.com/log ");
    assert_eq!(
        request.requested_source(),
        Some(RequestedSource::Url("https://example.com/log"))
    );
    assert!(request.wants_url());
}

#[test]
fn test_blank_url_falls_back_to_content() {
    let request = GenerationRequest::from_text("inline log text").with_url("   ");
    assert_eq!(
        request.requested_source(),
        Some(RequestedSource::Text("inline log text"))
    );
}

#[test]
fn test_missing_source() {
    let request = GenerationRequest::default();
    assert!(request.requested_source().is_none());
}

#[test]
fn test_empty_platform_list_is_empty_set() {
    let request = GenerationRequest::from_text("inline log text").with_platforms(Vec::<String>::new());
    assert!(request.platforms().unwrap().is_empty());
}

#[test]
fn test_unknown_platform_rejected() {
    let request = GenerationRequest::from_text("inline log text").with_platforms(["thread", "tiktok"]);
    let err = request.platforms().unwrap_err();
    assert_eq!(err.kind, InputErrorKind::UnknownPlatform("tiktok".to_string()));
}
