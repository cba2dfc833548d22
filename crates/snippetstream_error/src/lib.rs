//! Error types for SnippetStream.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Propagation policy:
//! - [`InputError`] and [`AuthorizationError`] reject a request before any
//!   generation work starts.
//! - [`CompletionError`] is contained inside the retry loop and never
//!   propagates past a single platform.
//! - [`PersistenceError`] is logged and discarded.
//! - [`ConfigError`] and [`BuilderError`] are fatal at startup.
//! - [`UnexpectedError`] is raised at the HTTP boundary when a request fails
//!   outside every family above, and is answered with a generic 500.
//!
//! # Examples
//!
//! ```
//! use snippetstream_error::{InputError, InputErrorKind, SnippetResult};
//!
//! fn resolve() -> SnippetResult<String> {
//!     Err(InputError::new(InputErrorKind::MissingContent))?
//! }
//!
//! let err = resolve().unwrap_err();
//! assert_eq!(err.status_code(), 400);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod authorization;
mod builder;
mod completion;
mod config;
mod error;
mod input;
mod json;
mod persistence;
mod unexpected;

pub use authorization::{AuthorizationError, AuthorizationErrorKind};
pub use builder::{BuilderError, BuilderErrorKind};
pub use completion::{CompletionError, CompletionErrorKind};
pub use config::ConfigError;
pub use error::{SnippetError, SnippetErrorKind, SnippetResult};
pub use input::{InputError, InputErrorKind};
pub use json::JsonError;
pub use persistence::PersistenceError;
pub use unexpected::UnexpectedError;
