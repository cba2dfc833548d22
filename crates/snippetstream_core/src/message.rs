//! Chat message types.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in a chat completion exchange.
///
/// # Examples
///
/// ```
/// use snippetstream_core::{Message, Role};
///
/// let message = Message::system("You are a build-in-public expert.");
/// assert_eq!(message.role, Role::System);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender
    pub role: Role,
    /// Text content
    pub content: String,
}

impl Message {
    /// Create a new message
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}

/// The (system prompt, user content) pair every generator sends.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PromptPair {
    /// Fixed generator instructions
    pub system: Message,
    /// The resolved daily log
    pub user: Message,
}

impl PromptPair {
    /// Build a pair from raw prompt text and content.
    pub fn new(system_prompt: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            system: Message::system(system_prompt),
            user: Message::user(content),
        }
    }

    /// Messages in send order.
    pub fn to_messages(&self) -> Vec<Message> {
        vec![self.system.clone(), self.user.clone()]
    }
}
