use serde::{Deserialize, Serialize};
use crate::document::DocumentInfo;
use crate::state::ChatState;

/// Events published by spawned browser tasks and drained by the UI
/// on each frame.
///
/// `target` is the id of the session that was active when the request was
/// submitted; results whose target no longer matches the active session are
/// discarded rather than committed to the wrong session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A submit cycle started; the submit control stays disabled until the
    /// matching `TurnComplete` arrives.
    TurnStart { target: Option<String> },

    /// A submit cycle settled with its resulting state (success or error).
    TurnComplete { target: Option<String>, state: ChatState },

    /// A file finished reading into a data URI.
    DocumentLoaded { document: DocumentInfo },

    /// A one-shot user-visible notification (e.g. file read failure).
    Notice { message: String },
}
