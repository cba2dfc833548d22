//! Client input error types.

/// Client input error conditions.
///
/// Any of these rejects the whole request before a single completion call is
/// made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum InputErrorKind {
    /// The request body could not be decoded
    #[display("Invalid request body: {}", _0)]
    MalformedBody(String),
    /// Neither inline content nor a URL was supplied
    #[display("Content or URL required")]
    MissingContent,
    /// Resolved content is shorter than the minimum after trimming
    #[display("Content is too short or empty ({} characters)", length)]
    ContentTooShort {
        /// Trimmed character count of the resolved content
        length: usize,
    },
    /// The enabled platform set is empty
    #[display("At least one platform must be selected")]
    NoPlatforms,
    /// A platform identifier was not recognised
    #[display("Unknown platform: {}", _0)]
    UnknownPlatform(String),
    /// The supplied URL could not be parsed
    #[display("Invalid URL: {}", _0)]
    InvalidUrl(String),
    /// Fetching the supplied URL failed (non-success status, timeout, transport)
    #[display("Failed to fetch content: {}", _0)]
    FetchFailed(String),
}

/// Client input error with source location tracking.
///
/// # Examples
///
/// ```
/// use snippetstream_error::{InputError, InputErrorKind};
///
/// let err = InputError::new(InputErrorKind::NoPlatforms);
/// assert!(format!("{}", err).contains("At least one platform"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Input Error: {} at line {} in {}", kind, line, file)]
pub struct InputError {
    /// The kind of error that occurred
    pub kind: InputErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl InputError {
    /// Create a new InputError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InputErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
