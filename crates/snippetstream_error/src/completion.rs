//! Completion endpoint error types.

/// Failure of a single call to the completion endpoint.
///
/// These are soft failures: the retry loop logs them and moves on to the next
/// (model, attempt) pair. They never reach the HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CompletionErrorKind {
    /// Request never produced a response (connect error, timeout)
    #[display("Completion request failed: {}", _0)]
    Transport(String),
    /// Endpoint answered with a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    Status {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason phrase
        message: String,
    },
    /// Response body was not a chat completion
    #[display("Failed to parse completion response: {}", _0)]
    Deserialization(String),
}

impl CompletionErrorKind {
    /// Whether the failure was a timeout or a server-side status.
    pub fn is_transient(&self) -> bool {
        match self {
            CompletionErrorKind::Transport(_) => true,
            CompletionErrorKind::Status { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            CompletionErrorKind::Deserialization(_) => false,
        }
    }
}

/// Completion error with source location tracking.
///
/// # Examples
///
/// ```
/// use snippetstream_error::{CompletionError, CompletionErrorKind};
///
/// let err = CompletionError::new(CompletionErrorKind::Status {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// });
/// assert!(err.kind.is_transient());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Completion Error: {} at line {} in {}", kind, line, file)]
pub struct CompletionError {
    /// The kind of error that occurred
    pub kind: CompletionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CompletionError {
    /// Create a new CompletionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CompletionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
