//! URL content retrieval for SnippetStream.
//!
//! [`ContentFetcher`] performs one GET with a browser-like user agent and a
//! fixed timeout, then reduces the page with [`reduce_html`]. Every failure
//! surfaces as an [`snippetstream_error::InputError`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod fetcher;
mod reduce;

pub use config::{FetchConfig, FetchConfigBuilder, FetchConfigBuilderError};
pub use fetcher::ContentFetcher;
pub use reduce::{NOISE_ELEMENTS, collapse_whitespace, reduce_html, strip_tags, truncate_chars};
