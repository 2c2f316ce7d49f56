//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the extraction engine and the
//! capabilities it consumes. Implementations live in other crates.

use crate::sentence::Sentence;

/// Trait for the linguistic annotator
///
/// Implemented by the infrastructure layer (spendy-annotator)
pub trait Annotator {
    /// Error type for annotation
    type Error;

    /// Split text into sentences and annotate each one with tokens and a
    /// dependency parse
    fn annotate(&self, text: &str) -> Result<Vec<Sentence>, Self::Error>;
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (spendy-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate text completion
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Generate with structured output (if supported)
    fn generate_structured(&self, prompt: &str, schema: &str) -> Result<String, Self::Error>;
}
