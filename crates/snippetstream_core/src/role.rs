//! Role types for chat participants.

use serde::{Deserialize, Serialize};

/// Role of a chat message sender, serialized the way chat-completion
/// endpoints expect (`"system"`, `"user"`, `"assistant"`).
///
/// # Examples
///
/// ```
/// use snippetstream_core::Role;
///
/// assert_eq!(format!("{}", Role::System), "system");
/// assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions that frame the generation
    #[display("system")]
    System,
    /// The founder's log
    #[display("user")]
    User,
    /// Model output
    #[display("assistant")]
    Assistant,
}
