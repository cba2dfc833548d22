use snippetstream_error::{
    AuthorizationError, AuthorizationErrorKind, BuilderError, BuilderErrorKind, CompletionError,
    CompletionErrorKind, ConfigError, InputError, InputErrorKind, PersistenceError, SnippetError,
    SnippetErrorKind, UnexpectedError,
};

#[test]
fn test_input_errors_map_to_bad_request() {
    for kind in [
        InputErrorKind::MissingContent,
        InputErrorKind::ContentTooShort { length: 3 },
        InputErrorKind::NoPlatforms,
        InputErrorKind::UnknownPlatform("myspace".to_string()),
        InputErrorKind::FetchFailed("HTTP 404".to_string()),
        InputErrorKind::MalformedBody("expected value at line 1".to_string()),
    ] {
        let err: SnippetError = InputError::new(kind).into();
        assert_eq!(err.status_code(), 400);
    }
}

#[test]
fn test_authorization_errors_map_to_distinct_statuses() {
    let limit: SnippetError =
        AuthorizationError::new(AuthorizationErrorKind::GenerationLimitReached { limit: 3 })
            .into();
    assert_eq!(limit.status_code(), 429);

    let url: SnippetError =
        AuthorizationError::new(AuthorizationErrorKind::UrlProcessingNotEntitled).into();
    assert_eq!(url.status_code(), 403);

    let missing: SnippetError =
        AuthorizationError::new(AuthorizationErrorKind::MissingCredentials).into();
    assert_eq!(missing.status_code(), 401);
}

#[test]
fn test_internal_errors_hide_details() {
    let err: SnippetError = PersistenceError::new("connection reset by peer").into();
    assert_eq!(err.status_code(), 500);
    assert_eq!(err.public_message(), "Server Error");

    let err: SnippetError = ConfigError::new("COMPLETION_API_KEY not set").into();
    assert_eq!(err.status_code(), 500);
    assert!(matches!(err.kind(), SnippetErrorKind::Config(_)));
}

#[test]
fn test_public_message_describes_input_problem() {
    let err: SnippetError =
        InputError::new(InputErrorKind::ContentTooShort { length: 4 }).into();
    assert!(err.public_message().contains("too short"));
}

#[test]
fn test_location_is_captured() {
    let err = CompletionError::new(CompletionErrorKind::Transport("timed out".to_string()));
    assert!(err.file.ends_with("status_code_test.rs"));
    assert!(err.kind.is_transient());

    let parse = CompletionErrorKind::Deserialization("eof".to_string());
    assert!(!parse.is_transient());
}

#[test]
fn test_builder_and_unexpected_errors_are_server_errors() {
    let builder: SnippetError = BuilderError::new(BuilderErrorKind::MissingField {
        target: "FetchConfig",
        field: "timeout",
    })
    .into();
    assert_eq!(builder.status_code(), 500);
    assert!(matches!(builder.kind(), SnippetErrorKind::Builder(_)));

    let unexpected: SnippetError = UnexpectedError::new("task panicked").into();
    assert_eq!(unexpected.status_code(), 500);
    assert_eq!(unexpected.public_message(), "Server Error");
}
