use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum QueryBotError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for QueryBotError {
    fn from(e: serde_json::Error) -> Self {
        QueryBotError::Serialization(e.to_string())
    }
}
