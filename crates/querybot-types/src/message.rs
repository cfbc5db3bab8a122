use serde::{Deserialize, Serialize};

/// Role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single message in a conversation. Immutable once created;
/// ordering within a session is append order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// Epoch milliseconds
    pub timestamp: i64,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: crate::new_id(),
            role: Role::User,
            content: text.into(),
            timestamp: crate::now_millis(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: crate::new_id(),
            role: Role::Assistant,
            content: text.into(),
            timestamp: crate::now_millis(),
        }
    }
}
