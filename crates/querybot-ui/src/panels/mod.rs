pub mod chat;
pub mod history;
pub mod language;

pub use chat::{chat_panel, ChatAction};
pub use history::{history_panel, HistoryAction};
pub use language::language_selector;
