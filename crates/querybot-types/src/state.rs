use serde::{Deserialize, Serialize};
use crate::document::DocumentInfo;
use crate::message::ChatMessage;

/// Transient, request-scoped projection of a session.
///
/// One submit cycle maps a previous `ChatState` to a new one; the result is
/// reconciled back into the session store and never persisted directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub document: Option<DocumentInfo>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same state with an error attached; used for validation failures
    /// where nothing else may change.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }
}
