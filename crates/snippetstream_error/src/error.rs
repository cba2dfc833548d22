//! Top-level error wrapper types.

use crate::{
    AuthorizationError, AuthorizationErrorKind, BuilderError, CompletionError, ConfigError,
    InputError, JsonError, PersistenceError, UnexpectedError,
};

/// Every error family the service can raise.
///
/// # Examples
///
/// ```
/// use snippetstream_error::{PersistenceError, SnippetError};
///
/// let err: SnippetError = PersistenceError::new("disk full").into();
/// assert!(format!("{}", err).contains("disk full"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SnippetErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error (fatal at startup)
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Client input error
    #[from(InputError)]
    Input(InputError),
    /// Authorization or entitlement error
    #[from(AuthorizationError)]
    Authorization(AuthorizationError),
    /// Completion endpoint error
    #[from(CompletionError)]
    Completion(CompletionError),
    /// Persistence error
    #[from(PersistenceError)]
    Persistence(PersistenceError),
    /// Anything else
    #[from(UnexpectedError)]
    Unexpected(UnexpectedError),
}

/// SnippetStream error with kind discrimination.
///
/// # Examples
///
/// ```
/// use snippetstream_error::{ConfigError, SnippetResult};
///
/// fn might_fail() -> SnippetResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("SnippetStream Error: {}", _0)]
pub struct SnippetError(Box<SnippetErrorKind>);

impl SnippetError {
    /// Create a new error from a kind.
    pub fn new(kind: SnippetErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SnippetErrorKind {
        &self.0
    }

    /// HTTP status an API boundary should answer with for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use snippetstream_error::{AuthorizationError, AuthorizationErrorKind, SnippetError};
    ///
    /// let err: SnippetError =
    ///     AuthorizationError::new(AuthorizationErrorKind::GenerationLimitReached { limit: 3 }).into();
    /// assert_eq!(err.status_code(), 429);
    /// ```
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            SnippetErrorKind::Input(_) => 400,
            SnippetErrorKind::Authorization(e) => match e.kind {
                AuthorizationErrorKind::MissingCredentials
                | AuthorizationErrorKind::UnknownCredentials => 401,
                AuthorizationErrorKind::InactiveAccount
                | AuthorizationErrorKind::UrlProcessingNotEntitled => 403,
                AuthorizationErrorKind::GenerationLimitReached { .. } => 429,
            },
            _ => 500,
        }
    }

    /// Message safe to show to the caller.
    ///
    /// Input and authorization errors describe the problem; every other
    /// family collapses to a generic server error so internals never leak.
    pub fn public_message(&self) -> String {
        match self.kind() {
            SnippetErrorKind::Input(e) => e.kind.to_string(),
            SnippetErrorKind::Authorization(e) => e.kind.to_string(),
            _ => "Server Error".to_string(),
        }
    }
}

// Generic From implementation for any type that converts to SnippetErrorKind
impl<T> From<T> for SnippetError
where
    T: Into<SnippetErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for SnippetStream operations.
pub type SnippetResult<T> = std::result::Result<T, SnippetError>;
