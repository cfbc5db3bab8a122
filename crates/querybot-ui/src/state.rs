//! View-level chat state and its reconciliation with the session store.
//!
//! `ChatView` bridges the transient `ChatState` produced by one submit cycle
//! to the durable `ChatSession` records: it is seeded from the active
//! session, absorbs `ChatEvent`s drained from the bus each frame, and
//! commits grown message lists back into the store (creating a session for
//! the first exchange, updating it afterwards — mirroring the store's own
//! draft-replacement rule so the two never produce duplicate sessions).

use querybot_core::event_bus::EventBus;
use querybot_core::session_store::SessionStore;
use querybot_types::document::{DocumentInfo, DocumentUpdate};
use querybot_types::event::ChatEvent;
use querybot_types::session::ChatSession;
use querybot_types::state::ChatState;

pub struct ChatView {
    /// Messages/document as last reconciled for the active session
    pub chat: ChatState,
    /// Id of the session this view currently mirrors
    pub active_id: Option<String>,
    /// Message count already committed to the store for the active session
    known_count: usize,
    /// A submit cycle is in flight; the send control is disabled
    pub pending: bool,
    /// Input field content
    pub input_text: String,
    /// Locally attached file, mirrored from the session document and fed
    /// into the next submit
    pub attached: Option<DocumentInfo>,
    /// One-shot notification, consumed via `take_toast`
    toast: Option<String>,
}

impl ChatView {
    pub fn new(store: &SessionStore) -> Self {
        let mut view = Self {
            chat: ChatState::new(),
            active_id: None,
            known_count: 0,
            pending: false,
            input_text: String::new(),
            attached: None,
            toast: None,
        };
        view.seed_from(store.active());
        view
    }

    /// Reseed the view from a newly active session. Clears the input field
    /// and mirrors the session's document into the attach control.
    pub fn seed_from(&mut self, session: Option<&ChatSession>) {
        match session {
            Some(session) => {
                self.active_id = Some(session.id.clone());
                self.chat = ChatState {
                    messages: session.messages.clone(),
                    document: session.document.clone(),
                    error: None,
                };
                self.known_count = session.messages.len();
                self.attached = session.document.clone();
            }
            None => {
                self.active_id = None;
                self.chat = ChatState::new();
                self.known_count = 0;
                self.attached = None;
            }
        }
        self.input_text.clear();
    }

    /// Absorb events drained from the bus for this frame.
    pub fn process_events(&mut self, events: Vec<ChatEvent>, store: &mut SessionStore) {
        for event in events {
            match event {
                ChatEvent::TurnStart { .. } => {
                    self.pending = true;
                }
                ChatEvent::TurnComplete { target, state } => {
                    self.pending = false;
                    if target.as_deref() != self.active_id.as_deref() {
                        // The user switched sessions mid-flight; this result
                        // no longer has a home.
                        log::info!("Discarding stale response for session {:?}", target);
                        continue;
                    }
                    self.commit(state, store);
                }
                ChatEvent::DocumentLoaded { document } => {
                    // Latest read wins
                    self.attached = Some(document);
                }
                ChatEvent::Notice { message } => {
                    self.toast = Some(message);
                }
            }
        }
    }

    /// Reconcile a settled `ChatState` into the store.
    fn commit(&mut self, state: ChatState, store: &mut SessionStore) {
        let grew = state.messages.len() > self.known_count;

        if grew {
            let is_first_exchange = self
                .active_id
                .as_deref()
                .and_then(|id| store.sessions().iter().find(|s| s.id == id))
                .map(|s| s.is_draft())
                .unwrap_or(true);

            if is_first_exchange {
                let id = store.create_session(state.messages.clone(), state.document.clone());
                self.active_id = Some(id);
            } else if let Some(id) = self.active_id.clone() {
                let update = match &state.document {
                    Some(doc) => DocumentUpdate::Set(doc.clone()),
                    None => DocumentUpdate::Cleared,
                };
                store.update_session(&id, state.messages.clone(), update);
            }
            self.known_count = state.messages.len();
        }

        // Surface only errors that carry new information, so re-renders
        // never repeat an old toast.
        if let Some(error) = &state.error {
            if grew || self.chat.error.as_deref() != Some(error.as_str()) {
                self.toast = Some(error.clone());
            }
        }

        self.attached = state.document.clone();
        self.chat = state;
    }

    /// Clear the attachment; if the active session already persisted this
    /// document, clear it there too. Direct store write, no AI round trip.
    pub fn remove_document(&mut self, store: &mut SessionStore) {
        self.attached = None;
        if self.chat.document.is_none() {
            return;
        }
        self.chat.document = None;
        if let Some(id) = self.active_id.clone() {
            store.update_session(&id, self.chat.messages.clone(), DocumentUpdate::Cleared);
        }
    }

    /// At most one document per session; the attach control is disabled
    /// while one is attached or a request is pending.
    pub fn can_attach(&self) -> bool {
        self.attached.is_none() && !self.pending
    }

    pub fn can_submit(&self) -> bool {
        !self.pending && !self.input_text.trim().is_empty()
    }

    /// Take the input field content, clearing it.
    pub fn take_input(&mut self) -> String {
        let text = self.input_text.trim().to_string();
        self.input_text.clear();
        text
    }

    /// One-shot: returns the pending notification at most once.
    pub fn take_toast(&mut self) -> Option<String> {
        self.toast.take()
    }
}

/// Drain the bus and fold everything into the view. Thin frame-loop helper.
pub fn sync_from_bus(view: &mut ChatView, bus: &EventBus, store: &mut SessionStore) -> bool {
    if !bus.has_pending() {
        return false;
    }
    view.process_events(bus.drain(), store);
    true
}
