//! HTTP client for the prompt-flow server.
//!
//! Each AI capability is exposed by the backend as a named flow endpoint:
//! POST `{base}/{flowName}` with body `{"data": <input>}`, responding with
//! `{"result": <output>}`. Uses browser `fetch()` via gloo-net for WASM
//! compatibility.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use querybot_core::ports::{
    AssistantPort, DocumentQuery, GenerateRequest, TranslationRequest,
};
use querybot_types::{QueryBotError, Result};

const GENERATE_RESPONSE_FLOW: &str = "generateResponseFlow";
const ANSWER_FROM_DOCUMENT_FLOW: &str = "answerFromDocumentFlow";
const RETRIEVE_FAQS_FLOW: &str = "retrieveRelevantFAQsFlow";
const TRANSLATE_TEXT_FLOW: &str = "translateTextFlow";

pub struct FlowClient {
    base_url: String,
}

impl FlowClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    async fn invoke<I, O>(&self, flow: &str, input: &I) -> Result<O>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, flow);
        let body = serde_json::json!({ "data": input });

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| QueryBotError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| QueryBotError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(QueryBotError::Model(format!("HTTP {}: {}", status, text)));
        }

        let envelope: FlowEnvelope<O> = response
            .json()
            .await
            .map_err(|e| QueryBotError::Model(e.to_string()))?;
        Ok(envelope.result)
    }
}

#[async_trait(?Send)]
impl AssistantPort for FlowClient {
    async fn generate_response(&self, req: GenerateRequest) -> Result<String> {
        let input = GenerateInput {
            query: &req.query,
            // The flow schema always expects the field; no FAQs means empty
            faq_content: req.faq_content.as_deref().unwrap_or(""),
        };
        let output: GenerateOutput = self.invoke(GENERATE_RESPONSE_FLOW, &input).await?;
        Ok(output.response)
    }

    async fn answer_from_document(&self, req: DocumentQuery) -> Result<String> {
        let input = DocumentInput {
            query: &req.query,
            document_data_uri: &req.document_data_uri,
        };
        let output: DocumentOutput = self.invoke(ANSWER_FROM_DOCUMENT_FLOW, &input).await?;
        Ok(output.answer)
    }

    async fn retrieve_relevant_faqs(&self, query: &str) -> Result<Vec<String>> {
        // This flow takes a bare string, not an object
        self.invoke(RETRIEVE_FAQS_FLOW, &query).await
    }

    async fn translate_text(&self, req: TranslationRequest) -> Result<String> {
        let input = TranslateInput {
            text: &req.text,
            target_language: &req.target_language,
        };
        let output: TranslateOutput = self.invoke(TRANSLATE_TEXT_FLOW, &input).await?;
        Ok(output.translated_text)
    }
}

// ─── Wire types ──────────────────────────────────────────────

#[derive(Deserialize)]
struct FlowEnvelope<T> {
    result: T,
}

#[derive(Serialize)]
struct GenerateInput<'a> {
    query: &'a str,
    #[serde(rename = "faqContent")]
    faq_content: &'a str,
}

#[derive(Deserialize)]
struct GenerateOutput {
    response: String,
}

#[derive(Serialize)]
struct DocumentInput<'a> {
    query: &'a str,
    #[serde(rename = "documentDataUri")]
    document_data_uri: &'a str,
}

#[derive(Deserialize)]
struct DocumentOutput {
    answer: String,
}

#[derive(Serialize)]
struct TranslateInput<'a> {
    text: &'a str,
    #[serde(rename = "targetLanguage")]
    target_language: &'a str,
}

#[derive(Deserialize)]
struct TranslateOutput {
    #[serde(rename = "translatedText")]
    translated_text: String,
}
