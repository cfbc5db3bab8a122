pub mod message;
pub mod event;
pub mod document;
pub mod session;
pub mod state;
pub mod language;
pub mod error;


pub use error::QueryBotError;
pub type Result<T> = std::result::Result<T, QueryBotError>;

/// Current time as epoch milliseconds. All timestamps in the data model
/// use this representation.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Fresh unique id for messages and sessions.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
