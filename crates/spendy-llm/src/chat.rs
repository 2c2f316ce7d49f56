//! Chat Completions Provider Implementation
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint. The default
//! target is the Together API serving Mistral-7B-Instruct.
//!
//! # Features
//!
//! - Async HTTP communication with bearer authentication
//! - Configurable endpoint, model, token budget and temperature
//! - Timeout handling
//! - One attempt per call; retry policy belongs to the caller
//!
//! # Examples
//!
//! ```no_run
//! use spendy_llm::ChatCompletionsProvider;
//!
//! let provider = ChatCompletionsProvider::together("my-api-key").unwrap();
//!
//! // The generate method is async; the LlmProvider trait offers a blocking wrapper
//! ```

use crate::LlmError;
use serde::{Deserialize, Serialize};
use spendy_domain::traits::LlmProvider as LlmProviderTrait;
use std::time::Duration;
use tracing::{debug, warn};

/// Default Together API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.together.xyz/v1";

/// Default instruction-tuned model
pub const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.3";

/// Default completion budget
pub const DEFAULT_MAX_TOKENS: u32 = 256;

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default timeout for LLM requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// OpenAI-compatible chat completions provider
pub struct ChatCompletionsProvider {
    endpoint: String,
    model: String,
    api_key: String,
    max_tokens: u32,
    temperature: f32,
    client: reqwest::Client,
}

/// Request body for the chat completions API
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response from the chat completions API
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl ChatCompletionsProvider {
    /// Create a new provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: API base URL (e.g., "https://api.together.xyz/v1")
    /// - `model`: Model to use (e.g., "mistralai/Mistral-7B-Instruct-v0.3")
    /// - `api_key`: Bearer token
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, LlmError> {
        Self::with_timeout(endpoint, model, api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new provider with a specific request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            client,
        })
    }

    /// Create a provider for the Together API with the default model
    pub fn together(api_key: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_MODEL, api_key)
    }

    /// Set the completion token budget
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Model this provider sends requests to
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text using the chat completions API
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The endpoint is unreachable or times out
    /// - The API key is rejected
    /// - The model is not available
    /// - The response carries no completion
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.endpoint);

        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        debug!("POST {} (model {}, prompt {} chars)", url, self.model, prompt.len());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Chat completions returned HTTP {}", status);
            return Err(error_for_status(status, &self.model, error_text));
        }

        let chat_response = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("Response has no choices".to_string()))
    }

    fn block_on_generate(&self, prompt: &str) -> Result<String, LlmError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?;
        runtime.block_on(self.generate(prompt))
    }
}

fn error_for_status(status: reqwest::StatusCode, model: &str, body: String) -> LlmError {
    use reqwest::StatusCode;

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            LlmError::Unauthorized(format!("HTTP {}", status))
        }
        StatusCode::NOT_FOUND => LlmError::ModelNotAvailable(model.to_string()),
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
        _ => LlmError::Communication(format!("HTTP {}: {}", status, body)),
    }
}

impl LlmProviderTrait for ChatCompletionsProvider {
    type Error = LlmError;

    // Must not be called from inside a tokio runtime
    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.block_on_generate(prompt)
    }

    fn generate_structured(&self, prompt: &str, _schema: &str) -> Result<String, Self::Error> {
        // TODO: send `response_format` with the schema once the target models honor it
        self.block_on_generate(prompt)
    }
}
