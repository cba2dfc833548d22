//! Errors raised while building validated settings.

/// Why a builder refused to produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BuilderErrorKind {
    /// A required field was never set
    #[display("{} is missing {}", target, field)]
    MissingField {
        /// Type being built
        target: &'static str,
        /// Field left unset
        field: &'static str,
    },
    /// A set of values failed validation
    #[display("Invalid {}: {}", target, reason)]
    Invalid {
        /// Type being built
        target: &'static str,
        /// What the validator rejected
        reason: String,
    },
}

/// Builder error with location tracking.
///
/// # Examples
///
/// ```
/// use snippetstream_error::{BuilderError, BuilderErrorKind};
///
/// let err = BuilderError::new(BuilderErrorKind::Invalid {
///     target: "RetryPolicy",
///     reason: "no models".to_string(),
/// });
/// assert!(format!("{}", err).contains("Invalid RetryPolicy: no models"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder Error: {} at line {} in {}", kind, line, file)]
pub struct BuilderError {
    /// The kind of error that occurred
    pub kind: BuilderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl BuilderError {
    /// Create a new builder error with caller location tracking.
    #[track_caller]
    pub fn new(kind: BuilderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
