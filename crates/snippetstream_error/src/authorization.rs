//! Authorization error types.

/// Authorization and entitlement failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AuthorizationErrorKind {
    /// No credentials were presented
    #[display("Missing credentials")]
    MissingCredentials,
    /// Credentials did not match a known account
    #[display("Invalid credentials")]
    UnknownCredentials,
    /// The account exists but is disabled
    #[display("Inactive account")]
    InactiveAccount,
    /// The caller has used up the daily generation allowance
    #[display("Daily generation limit reached ({} per day)", limit)]
    GenerationLimitReached {
        /// Allowed generations per day
        limit: u32,
    },
    /// The caller's plan does not include URL processing
    #[display("URL processing is a Pro feature")]
    UrlProcessingNotEntitled,
}

/// Authorization error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Authorization Error: {} at line {} in {}", kind, line, file)]
pub struct AuthorizationError {
    /// The kind of error that occurred
    pub kind: AuthorizationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AuthorizationError {
    /// Create a new AuthorizationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AuthorizationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
