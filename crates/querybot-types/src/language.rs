use serde::{Deserialize, Serialize};

/// UI and answer languages the bot supports.
/// Unrecognized persisted values fall back to `English`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::Spanish,
            Language::French,
            Language::German,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
        }
    }

    pub fn parse(value: &str) -> Language {
        Language::all()
            .iter()
            .copied()
            .find(|l| l.label() == value)
            .unwrap_or_default()
    }

    pub fn translations(&self) -> &'static Translations {
        match self {
            Language::English => &ENGLISH,
            Language::Spanish => &SPANISH,
            Language::French => &FRENCH,
            Language::German => &GERMAN,
        }
    }
}

/// Localized UI strings
pub struct Translations {
    pub title: &'static str,
    pub chat_history: &'static str,
    pub new_chat: &'static str,
    pub clear_history: &'static str,
    pub bot_at_your_service: &'static str,
    pub start_conversation: &'static str,
    pub input_placeholder: &'static str,
    pub thinking: &'static str,
    pub attach_file: &'static str,
}

static ENGLISH: Translations = Translations {
    title: "Query Bot",
    chat_history: "Chat History",
    new_chat: "New Chat",
    clear_history: "Clear History",
    bot_at_your_service: "Query Bot at your service",
    start_conversation: "Start a new conversation or upload a document.",
    input_placeholder: "Type your question here...",
    thinking: "Thinking...",
    attach_file: "Attach file",
};

static SPANISH: Translations = Translations {
    title: "Query Bot",
    chat_history: "Historial de chat",
    new_chat: "Nuevo chat",
    clear_history: "Limpiar historial",
    bot_at_your_service: "Query Bot a tu servicio",
    start_conversation: "Inicia una nueva conversación o sube un documento.",
    input_placeholder: "Escribe tu pregunta aquí...",
    thinking: "Pensando...",
    attach_file: "Adjuntar archivo",
};

static FRENCH: Translations = Translations {
    title: "Query Bot",
    chat_history: "Historique des discussions",
    new_chat: "Nouvelle discussion",
    clear_history: "Effacer l'historique",
    bot_at_your_service: "Query Bot à votre service",
    start_conversation: "Commencez une nouvelle conversation ou téléchargez un document.",
    input_placeholder: "Tapez votre question ici...",
    thinking: "Réflexion...",
    attach_file: "Joindre un fichier",
};

static GERMAN: Translations = Translations {
    title: "Query Bot",
    chat_history: "Chatverlauf",
    new_chat: "Neuer Chat",
    clear_history: "Verlauf löschen",
    bot_at_your_service: "Query Bot zu Ihren Diensten",
    start_conversation: "Starten Sie ein neues Gespräch oder laden Sie ein Dokument hoch.",
    input_placeholder: "Geben Sie hier Ihre Frage ein...",
    thinking: "Denken...",
    attach_file: "Datei anhängen",
};
