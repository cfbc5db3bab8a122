//! Persisted user preferences. Currently just the answer language.

use querybot_types::language::Language;
use crate::ports::KvStore;

pub const LANGUAGE_KEY: &str = "querybot-language";

/// Read the stored language; missing, unreadable, or unrecognized values
/// fall back to the default.
pub fn load_language(store: &dyn KvStore) -> Language {
    match store.get(LANGUAGE_KEY) {
        Ok(Some(value)) => Language::parse(&value),
        Ok(None) => Language::default(),
        Err(e) => {
            log::warn!("Failed to read language preference: {}", e);
            Language::default()
        }
    }
}

pub fn save_language(store: &dyn KvStore, language: Language) {
    if let Err(e) = store.set(LANGUAGE_KEY, language.label()) {
        log::warn!("Failed to save language preference: {}", e);
    }
}
