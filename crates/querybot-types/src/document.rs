use serde::{Deserialize, Serialize};

/// A user-uploaded document attached to a session.
/// At most one per session; replacing loses the previous reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub name: String,
    /// `data:<mime>;base64,<data>` URI
    pub data_uri: String,
}

impl DocumentInfo {
    pub fn new(name: impl Into<String>, data_uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_uri: data_uri.into(),
        }
    }

    /// Shape check for the data URI the document-QA flow expects.
    pub fn has_valid_data_uri(&self) -> bool {
        self.data_uri.starts_with("data:") && self.data_uri.contains(";base64,")
    }
}

/// Explicit update sentinel for a session's document.
///
/// `update_session` callers must distinguish "leave the document alone"
/// from "clear it", so plain `Option<DocumentInfo>` is not enough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentUpdate {
    Unchanged,
    Cleared,
    Set(DocumentInfo),
}

impl DocumentUpdate {
    /// Apply this update on top of an existing document slot.
    pub fn apply(self, current: Option<DocumentInfo>) -> Option<DocumentInfo> {
        match self {
            DocumentUpdate::Unchanged => current,
            DocumentUpdate::Cleared => None,
            DocumentUpdate::Set(doc) => Some(doc),
        }
    }
}
