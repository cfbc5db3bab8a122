//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `querybot-core` (pure Rust).
//! Implementations live in `querybot-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use querybot_types::Result;

// ─── Key-Value Store Port ────────────────────────────────────

/// Synchronous string key-value persistence, localStorage semantics:
/// single key per logical store, no transactions, one tab assumed.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Assistant Port ──────────────────────────────────────────

/// Input for the conversational-response flow
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub query: String,
    /// Relevant FAQ content folded into the prompt, when any was retrieved
    pub faq_content: Option<String>,
}

/// Input for the document question-answering flow
#[derive(Debug, Clone)]
pub struct DocumentQuery {
    pub query: String,
    /// Must be a `data:<mime>;base64,<data>` URI
    pub document_data_uri: String,
}

/// Input for the translation flow
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub text: String,
    pub target_language: String,
}

/// The AI collaborator: four structured prompt flows, all asynchronous.
/// A failing or empty model output surfaces as `QueryBotError::Model`.
#[async_trait(?Send)]
pub trait AssistantPort {
    /// General conversational answer
    async fn generate_response(&self, req: GenerateRequest) -> Result<String>;

    /// Answer grounded in an attached document
    async fn answer_from_document(&self, req: DocumentQuery) -> Result<String>;

    /// FAQ retrieval; may return an empty list
    async fn retrieve_relevant_faqs(&self, query: &str) -> Result<Vec<String>>;

    /// Translate an answer into the requested language
    async fn translate_text(&self, req: TranslationRequest) -> Result<String>;
}
