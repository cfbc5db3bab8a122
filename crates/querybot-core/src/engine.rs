//! One submit → AI round trip.
//!
//! `submit` maps a previous `ChatState` plus form input to a new `ChatState`:
//! 1. Reject empty queries without touching the message list.
//! 2. Append the user message.
//! 3. Resolve the effective document (new attachment replaces, otherwise the
//!    previous one carries forward).
//! 4. Flatten the whole conversation into a role-tagged transcript so the
//!    stateless model call has conversational memory.
//! 5. Answer from the document when one is attached, else retrieve FAQs and
//!    fold them into the general response flow.
//! 6. Translate when a non-default language is requested.
//!
//! Collaborator failures never escape: they become the `error` field of the
//! returned state, with the user's message retained.

use std::rc::Rc;

use querybot_types::document::DocumentInfo;
use querybot_types::language::Language;
use querybot_types::message::ChatMessage;
use querybot_types::state::ChatState;
use querybot_types::{QueryBotError, Result};

use crate::ports::{AssistantPort, DocumentQuery, GenerateRequest, TranslationRequest};

/// Form fields consumed by one submit cycle
#[derive(Debug, Clone, Default)]
pub struct SubmitInput {
    pub query: String,
    pub file_data_uri: Option<String>,
    pub file_name: Option<String>,
    pub language: Language,
}

pub struct QueryEngine {
    assistant: Rc<dyn AssistantPort>,
}

impl QueryEngine {
    pub fn new(assistant: Rc<dyn AssistantPort>) -> Self {
        Self { assistant }
    }

    pub async fn submit(&self, previous: &ChatState, input: SubmitInput) -> ChatState {
        let query = input.query.trim().to_string();
        if query.is_empty() {
            return previous.clone().with_error("Please enter a query.");
        }

        let mut messages = previous.messages.clone();
        messages.push(ChatMessage::user(&query));

        // A freshly attached file replaces any prior document; both fields
        // are required to register one.
        let document = match (input.file_data_uri, input.file_name) {
            (Some(data_uri), Some(name)) => Some(DocumentInfo::new(name, data_uri)),
            _ => previous.document.clone(),
        };

        let transcript = flatten_transcript(&messages, &query);

        match self
            .answer(&transcript, &query, document.as_ref(), input.language)
            .await
        {
            Ok(text) => {
                messages.push(ChatMessage::assistant(text));
                ChatState {
                    messages,
                    document,
                    error: None,
                }
            }
            Err(e) => {
                log::error!("Submit failed: {}", e);
                ChatState {
                    messages,
                    document,
                    error: Some(format!("Sorry, something went wrong. {}", e)),
                }
            }
        }
    }

    async fn answer(
        &self,
        transcript: &str,
        query: &str,
        document: Option<&DocumentInfo>,
        language: Language,
    ) -> Result<String> {
        let raw = match document {
            Some(doc) => {
                self.assistant
                    .answer_from_document(DocumentQuery {
                        query: transcript.to_string(),
                        document_data_uri: doc.data_uri.clone(),
                    })
                    .await?
            }
            None => {
                // FAQ retrieval is best-effort; a failure degrades to an
                // answer without FAQ context.
                let faqs = match self.assistant.retrieve_relevant_faqs(query).await {
                    Ok(faqs) => faqs,
                    Err(e) => {
                        log::warn!("FAQ retrieval failed: {}", e);
                        Vec::new()
                    }
                };
                let faq_content = if faqs.is_empty() {
                    None
                } else {
                    Some(faqs.join("\n"))
                };
                self.assistant
                    .generate_response(GenerateRequest {
                        query: transcript.to_string(),
                        faq_content,
                    })
                    .await?
            }
        };

        if raw.trim().is_empty() {
            return Err(QueryBotError::Model(
                "AI failed to generate a response.".to_string(),
            ));
        }

        if language == Language::English {
            return Ok(raw);
        }
        self.assistant
            .translate_text(TranslationRequest {
                text: raw,
                target_language: language.label().to_string(),
            })
            .await
    }
}

/// Flatten all messages (including the just-appended user message) into a
/// role-tagged transcript, then restate the new query as the current one.
fn flatten_transcript(messages: &[ChatMessage], query: &str) -> String {
    let history = messages
        .iter()
        .map(|m| format!("{}: {}", m.role.label(), m.content))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "CONVERSATION HISTORY:\n{}\n\nCURRENT QUERY: {}",
        history, query
    )
}
