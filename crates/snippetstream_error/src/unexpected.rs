//! Catch-all error for failures outside the modelled taxonomy.

/// Unexpected error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Unexpected Error: {} at line {} in {}", message, line, file)]
pub struct UnexpectedError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl UnexpectedError {
    /// Create a new UnexpectedError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use snippetstream_error::UnexpectedError;
    ///
    /// let err = UnexpectedError::new("listener closed");
    /// assert!(err.message.contains("listener"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
