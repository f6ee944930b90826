/// Core error types for Chord
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Chord
#[derive(Error, Debug)]
pub enum CoreError {
    /// Document parse failure
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Structurally valid JSON that violates the document model
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

impl CoreError {
    /// Create an invalid document error
    pub fn invalid_document(msg: impl Into<String>) -> Self {
        Self::InvalidDocument(msg.into())
    }
}
