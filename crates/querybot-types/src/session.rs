use serde::{Deserialize, Serialize};
use crate::document::DocumentInfo;
use crate::message::ChatMessage;

/// A persisted conversation session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub messages: Vec<ChatMessage>,
    /// Epoch milliseconds; sessions are displayed newest-first by this field.
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub document: Option<DocumentInfo>,
}

impl ChatSession {
    pub fn new(messages: Vec<ChatMessage>, document: Option<DocumentInfo>) -> Self {
        Self {
            id: crate::new_id(),
            messages,
            created_at: crate::now_millis(),
            document,
        }
    }

    /// An empty session, eligible for silent replacement.
    pub fn draft() -> Self {
        Self::new(Vec::new(), None)
    }

    pub fn is_draft(&self) -> bool {
        self.messages.is_empty()
    }

    /// Sidebar label: the first user message, if any.
    pub fn title(&self) -> Option<&str> {
        self.messages.first().map(|m| m.content.as_str())
    }
}
