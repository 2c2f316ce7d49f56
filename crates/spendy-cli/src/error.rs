//! Error types for the CLI application.

use spendy_annotator::AnnotatorError;
use spendy_extractor::ExtractorError;
use spendy_llm::LlmError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extraction failed
    #[error("Extraction error: {0}")]
    Extractor(#[from] ExtractorError),

    /// Annotator could not be built or read
    #[error("Annotator error: {0}")]
    Annotator(#[from] AnnotatorError),

    /// LLM provider could not be built
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
