//! UDPipe Annotator Implementation
//!
//! Sends text to a UDPipe REST service (`/process`) with tokenization,
//! tagging and parsing enabled, then reads the CoNLL-U it returns.
//!
//! # Examples
//!
//! ```no_run
//! use spendy_annotator::UdpipeAnnotator;
//! use spendy_domain::traits::Annotator;
//!
//! let annotator = UdpipeAnnotator::lindat().unwrap();
//! let sentences = annotator.annotate("I bought 2 kg rice").unwrap();
//! ```

use crate::{parse_conllu, AnnotatorError};
use serde::Deserialize;
use spendy_domain::traits::Annotator;
use spendy_domain::Sentence;
use std::time::Duration;
use tracing::{debug, warn};

/// Public LINDAT UDPipe service
pub const DEFAULT_ENDPOINT: &str = "https://lindat.mff.cuni.cz/services/udpipe/api";

/// English model producing Penn Treebank XPOS tags
pub const DEFAULT_MODEL: &str = "english-ewt-ud-2.12-230717";

/// Default timeout for annotation requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Annotator backed by a UDPipe REST service
pub struct UdpipeAnnotator {
    endpoint: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct ProcessResponse {
    result: String,
}

impl UdpipeAnnotator {
    /// Create an annotator for `endpoint` using `model`
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, AnnotatorError> {
        Self::with_timeout(endpoint, model, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create an annotator with a specific request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AnnotatorError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AnnotatorError::Communication(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client,
        })
    }

    /// Create an annotator for the public LINDAT service
    pub fn lindat() -> Result<Self, AnnotatorError> {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_MODEL)
    }

    /// Model name sent with each request
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Annotate text and return the raw CoNLL-U document
    pub async fn process(&self, text: &str) -> Result<String, AnnotatorError> {
        let url = format!("{}/process", self.endpoint);
        let form = [
            ("model", self.model.as_str()),
            ("tokenizer", ""),
            ("tagger", ""),
            ("parser", ""),
            ("data", text),
        ];

        debug!("POST {} (model {}, {} chars)", url, self.model, text.len());

        let response = self
            .client
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| AnnotatorError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("UDPipe returned HTTP {}", status);
            return Err(AnnotatorError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body = response
            .json::<ProcessResponse>()
            .await
            .map_err(|e| AnnotatorError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(body.result)
    }

    fn block_on_process(&self, text: &str) -> Result<String, AnnotatorError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| AnnotatorError::Communication(format!("Failed to start runtime: {}", e)))?;
        runtime.block_on(self.process(text))
    }
}

impl Annotator for UdpipeAnnotator {
    type Error = AnnotatorError;

    // Must not be called from inside a tokio runtime
    fn annotate(&self, text: &str) -> Result<Vec<Sentence>, Self::Error> {
        let document = self.block_on_process(text)?;
        parse_conllu(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotator_creation() {
        let annotator = UdpipeAnnotator::new("http://localhost:8001/", "english").unwrap();
        assert_eq!(annotator.endpoint, "http://localhost:8001");
        assert_eq!(annotator.model(), "english");
    }

    #[test]
    fn test_lindat_defaults() {
        let annotator = UdpipeAnnotator::lindat().unwrap();
        assert_eq!(annotator.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(annotator.model(), DEFAULT_MODEL);
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{"model":"english-ewt","acknowledgements":["x"],"result":"1\trice\trice\tNOUN\tNN\t_\t0\troot\t_\t_\n"}"#;
        let parsed: ProcessResponse = serde_json::from_str(body).unwrap();
        let sentences = parse_conllu(&parsed.result).unwrap();
        assert_eq!(sentences[0].tokens()[0].lemma, "rice");
    }

    #[test]
    fn test_unreachable_endpoint() {
        // Use invalid endpoint to trigger error
        let annotator =
            UdpipeAnnotator::with_timeout("http://localhost:99999", "english", Duration::from_secs(2))
                .unwrap();

        let result = annotator.annotate("buy rice");
        assert!(matches!(result, Err(AnnotatorError::Communication(_))));
    }

    // Integration test (requires network access)
    #[tokio::test]
    #[ignore]
    async fn test_lindat_process_integration() {
        let annotator = UdpipeAnnotator::lindat().unwrap();
        let document = annotator.process("I bought 2 kg rice.").await.unwrap();
        let sentences = parse_conllu(&document).unwrap();
        assert_eq!(sentences.len(), 1);
        assert!(sentences[0].dependency_graph().root().is_some());
    }
}
