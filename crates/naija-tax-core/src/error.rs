use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaxEngineError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl TaxEngineError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        TaxEngineError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for TaxEngineError {
    fn from(e: serde_json::Error) -> Self {
        TaxEngineError::SerializationError(e.to_string())
    }
}
