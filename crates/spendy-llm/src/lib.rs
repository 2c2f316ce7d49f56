//! Spendy LLM Provider Layer
//!
//! Generation capability implementations for the reminder extractor.
//!
//! # Architecture
//!
//! This crate provides implementations of the `LlmProvider` trait from `spendy-domain`.
//! It supports multiple LLM backends with a common interface.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `ChatCompletionsProvider`: OpenAI-compatible chat completions (Together API by default)
//!
//! # Examples
//!
//! ```
//! use spendy_llm::MockProvider;
//! use spendy_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new(r#""rice", "20", "2kg", "25-12-2025 14:00""#);
//! let result = provider.generate("test prompt").unwrap();
//! assert!(result.contains("rice"));
//! ```

#![warn(missing_docs)]

pub mod chat;

use spendy_domain::traits::LlmProvider as LlmProviderTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

pub use chat::ChatCompletionsProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// API key missing or rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Scripted reply for one prompt
#[derive(Debug, Clone)]
enum Reply {
    Answer(String),
    Failure,
}

/// Mock LLM provider for deterministic testing
///
/// This provider returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use spendy_llm::MockProvider;
/// use spendy_domain::traits::LlmProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.generate("any prompt").unwrap(), "Fixed response");
///
/// // Per-prompt responses
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// provider.add_error("prompt2");
/// assert_eq!(provider.generate("prompt1").unwrap(), "response1");
/// assert!(provider.generate("prompt2").is_err());
///
/// // A capability that is down
/// let provider = MockProvider::unreachable();
/// assert!(provider.generate("anything").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_reply: Reply,
    replies: Arc<Mutex<HashMap<String, Reply>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self::with_default(Reply::Answer(response.into()))
    }

    /// Create a MockProvider whose every call fails as if the service were down
    pub fn unreachable() -> Self {
        Self::with_default(Reply::Failure)
    }

    fn with_default(default_reply: Reply) -> Self {
        Self {
            default_reply,
            replies: Arc::new(Mutex::new(HashMap::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        lock(&self.replies).insert(prompt.into(), Reply::Answer(response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        lock(&self.replies).insert(prompt.into(), Reply::Failure);
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        lock(&self.prompts).len()
    }

    /// The most recent prompt, if any
    pub fn last_prompt(&self) -> Option<String> {
        lock(&self.prompts).last().cloned()
    }

    /// Reset the call history
    pub fn reset_call_count(&self) {
        lock(&self.prompts).clear();
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        lock(&self.prompts).push(prompt.to_string());

        let reply = lock(&self.replies)
            .get(prompt)
            .cloned()
            .unwrap_or_else(|| self.default_reply.clone());

        match reply {
            Reply::Answer(text) => Ok(text),
            Reply::Failure => Err(LlmError::Communication("Mock provider unreachable".to_string())),
        }
    }

    fn generate_structured(&self, prompt: &str, _schema: &str) -> Result<String, Self::Error> {
        self.generate(prompt)
    }
}

// Poisoned locks still hand out the inner value
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
