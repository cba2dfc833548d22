//! Platform generators for SnippetStream.
//!
//! Each generator pairs a fixed system prompt with the resolved daily log,
//! runs it through [`snippetstream_models::RetryableCompletion`] and shapes
//! the answer into its platform's fixed structure:
//!
//! | Generator | Budget | Shape |
//! |---|---|---|
//! | [`ThreadGenerator`] | 2000 tokens | exactly 10 lines |
//! | [`PostGenerator`] | 1500 tokens | free text |
//! | [`CarouselGenerator`] | 1500 tokens | exactly 8 two-line slides |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generator;
mod prompts;
mod shaping;

pub use generator::{
    CAROUSEL_MAX_TOKENS, CarouselGenerator, POST_MAX_TOKENS, PlatformGenerator, PostGenerator,
    THREAD_MAX_TOKENS, ThreadGenerator, generator_for,
};
pub use prompts::{CAROUSEL_PROMPT, POST_PROMPT, THREAD_PROMPT, thread_prompt};
pub use shaping::{CAROUSEL_FILLER, shape_carousel, shape_thread, thread_filler};
