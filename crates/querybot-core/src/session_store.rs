//! Durable CRUD over chat sessions plus active-session selection.
//!
//! The whole collection is written as one JSON array under a single key,
//! re-sorted newest-first before every write. Write failures are logged and
//! swallowed; in-memory state may then run ahead of persisted state until
//! the next successful write, which is acceptable for local-only storage.

use std::rc::Rc;

use querybot_types::document::{DocumentInfo, DocumentUpdate};
use querybot_types::message::ChatMessage;
use querybot_types::session::ChatSession;

use crate::ports::KvStore;

pub const CHAT_HISTORY_KEY: &str = "gyanbot-chat-history";

pub struct SessionStore {
    store: Rc<dyn KvStore>,
    sessions: Vec<ChatSession>,
    active_id: Option<String>,
}

impl SessionStore {
    /// Read the persisted collection. Absent, empty, or corrupt state loads
    /// as empty; the store then starts with one fresh draft session. The
    /// most recently created session becomes active.
    pub fn load(store: Rc<dyn KvStore>) -> Self {
        let sessions = match store.get(CHAT_HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<ChatSession>>(&raw) {
                Ok(sessions) => sessions,
                Err(e) => {
                    log::warn!("Corrupt chat history, starting fresh: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Failed to read chat history: {}", e);
                Vec::new()
            }
        };

        let mut this = Self {
            store,
            sessions,
            active_id: None,
        };
        this.sort();
        if this.sessions.is_empty() {
            this.fresh_draft();
        } else {
            this.active_id = Some(this.sessions[0].id.clone());
        }
        this
    }

    pub fn sessions(&self) -> &[ChatSession] {
        &self.sessions
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn active(&self) -> Option<&ChatSession> {
        let id = self.active_id.as_deref()?;
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn set_active(&mut self, id: &str) {
        if self.sessions.iter().any(|s| s.id == id) {
            self.active_id = Some(id.to_string());
        }
    }

    /// Create a session and make it active; returns its id.
    ///
    /// If the active session is a draft and the incoming messages are also
    /// empty, this is a no-op that re-selects the existing draft, so that
    /// repeated "new chat" clicks never accumulate empties. If the active
    /// session is a draft with content incoming, the new session replaces
    /// it in place; otherwise it is prepended.
    pub fn create_session(
        &mut self,
        messages: Vec<ChatMessage>,
        document: Option<DocumentInfo>,
    ) -> String {
        if let Some(active) = self.active() {
            if active.is_draft() && messages.is_empty() {
                return active.id.clone();
            }
        }

        let session = ChatSession::new(messages, document);
        let id = session.id.clone();

        let draft_pos = self
            .active_id
            .as_deref()
            .and_then(|active| self.sessions.iter().position(|s| s.id == active && s.is_draft()));
        match draft_pos {
            Some(pos) => self.sessions[pos] = session,
            None => self.sessions.insert(0, session),
        }

        self.active_id = Some(id.clone());
        self.persist();
        id
    }

    /// Replace a session's messages; the document slot changes only when the
    /// update says so.
    pub fn update_session(
        &mut self,
        id: &str,
        messages: Vec<ChatMessage>,
        document: DocumentUpdate,
    ) {
        match self.sessions.iter_mut().find(|s| s.id == id) {
            Some(session) => {
                session.messages = messages;
                session.document = document.apply(session.document.take());
                self.persist();
            }
            None => log::warn!("update_session: no session with id {}", id),
        }
    }

    /// Remove a session. Deleting the active session promotes the next
    /// remaining entry in display order, or creates a fresh draft when none
    /// remain.
    pub fn delete_session(&mut self, id: &str) {
        let Some(pos) = self.sessions.iter().position(|s| s.id == id) else {
            return;
        };
        self.sessions.remove(pos);
        let was_active = self.active_id.as_deref() == Some(id);
        if was_active {
            self.active_id = None;
            if self.sessions.is_empty() {
                self.fresh_draft();
                return;
            }
            let next = pos.min(self.sessions.len() - 1);
            self.active_id = Some(self.sessions[next].id.clone());
        }
        self.persist();
    }

    /// Drop all persisted and in-memory state, then start over with exactly
    /// one fresh draft session.
    pub fn clear_all(&mut self) {
        if let Err(e) = self.store.remove(CHAT_HISTORY_KEY) {
            log::warn!("Failed to clear chat history: {}", e);
        }
        self.sessions.clear();
        self.active_id = None;
        self.fresh_draft();
    }

    fn fresh_draft(&mut self) {
        let draft = ChatSession::draft();
        self.active_id = Some(draft.id.clone());
        self.sessions.insert(0, draft);
        self.persist();
    }

    fn sort(&mut self) {
        // Stable: ties keep insertion order
        self.sessions.sort_by_key(|s| std::cmp::Reverse(s.created_at));
    }

    fn persist(&mut self) {
        self.sort();
        let json = match serde_json::to_string(&self.sessions) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to serialize chat history: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(CHAT_HISTORY_KEY, &json) {
            log::warn!("Failed to save chat history: {}", e);
        }
    }
}
