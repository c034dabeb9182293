//! Error types for the remit-core library.

use thiserror::Error;

/// Main error type for the remit library.
///
/// "Field not found" is deliberately not an error: extraction strategies
/// return `Option<Annotation>` and absence is a normal outcome.
#[derive(Error, Debug)]
pub enum RemitError {
    /// Malformed OCR payload (e.g. a bounding polygon without four vertices).
    #[error("invalid OCR input: {0}")]
    InvalidInput(String),

    /// The OCR response was not valid JSON.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the remit library.
pub type Result<T> = std::result::Result<T, RemitError>;
