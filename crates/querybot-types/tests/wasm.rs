//! WASM-target tests for querybot-types.
//!
//! Mirrors the native unit tests but runs under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use querybot_types::document::*;
use querybot_types::language::*;
use querybot_types::message::*;
use querybot_types::session::*;
use querybot_types::state::*;

#[wasm_bindgen_test]
fn message_user() {
    let msg = ChatMessage::user("Hello");
    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.content, "Hello");
    assert!(!msg.id.is_empty());
}

#[wasm_bindgen_test]
fn message_assistant() {
    let msg = ChatMessage::assistant("I can help");
    assert_eq!(msg.role, Role::Assistant);
}

#[wasm_bindgen_test]
fn message_serialization_roundtrip() {
    let msg = ChatMessage::user("test input");
    let json = serde_json::to_string(&msg).unwrap();
    let deserialized: ChatMessage = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.role, Role::User);
    assert_eq!(deserialized.content, "test input");
}

#[wasm_bindgen_test]
fn session_draft_is_empty() {
    let session = ChatSession::draft();
    assert!(session.is_draft());
    assert!(session.document.is_none());
}

#[wasm_bindgen_test]
fn session_serialization_roundtrip() {
    let session = ChatSession::new(vec![ChatMessage::user("hi")], None);
    let json = serde_json::to_string(&session).unwrap();
    let deserialized: ChatSession = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.id, session.id);
    assert_eq!(deserialized.messages.len(), 1);
}

#[wasm_bindgen_test]
fn document_data_uri_shape() {
    let doc = DocumentInfo::new("notes.pdf", "data:application/pdf;base64,AAAA");
    assert!(doc.has_valid_data_uri());
}

#[wasm_bindgen_test]
fn document_update_cleared() {
    let current = Some(DocumentInfo::new("a", "data:text/plain;base64,QQ=="));
    assert_eq!(DocumentUpdate::Cleared.apply(current), None);
}

#[wasm_bindgen_test]
fn chat_state_with_error() {
    let state = ChatState::new().with_error("Please enter a query.");
    assert!(state.messages.is_empty());
    assert_eq!(state.error.as_deref(), Some("Please enter a query."));
}

#[wasm_bindgen_test]
fn language_parse_fallback() {
    assert_eq!(Language::parse("Spanish"), Language::Spanish);
    assert_eq!(Language::parse("nope"), Language::English);
}
