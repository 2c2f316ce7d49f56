//! Error types for the extractors

use thiserror::Error;

/// Errors that can occur during extraction
///
/// Empty results and reminder rejections are not errors; they come back as
/// `Ok` values.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Linguistic annotator error
    #[error("Annotator error: {0}")]
    Annotator(String),

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Transcript exceeds maximum length
    #[error("Transcript too long: {0} chars (max: {1})")]
    TranscriptTooLong(usize, usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// LLM answer did not have the expected shape
    #[error("Invalid answer format: {0}")]
    InvalidFormat(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}
