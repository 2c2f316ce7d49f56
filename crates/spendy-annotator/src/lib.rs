//! Spendy Annotator Layer
//!
//! Linguistic annotator implementations: each turns raw text into sentences
//! carrying Penn-style POS tags and Universal Dependencies relations.
//!
//! # Annotators
//!
//! - `MockAnnotator`: Returns pre-built sentences, for tests
//! - `UdpipeAnnotator`: Calls a UDPipe REST service and reads its CoNLL-U output
//!
//! Pre-annotated CoNLL-U documents can be read directly with [`parse_conllu`].
//!
//! # Examples
//!
//! ```
//! use spendy_annotator::parse_conllu;
//!
//! let doc = concat!(
//!     "# text = buy rice\n",
//!     "1\tbuy\tbuy\tVERB\tVB\t_\t0\troot\t_\t_\n",
//!     "2\trice\trice\tNOUN\tNN\t_\t1\tobj\t_\t_\n",
//! );
//! let sentences = parse_conllu(doc).unwrap();
//! assert_eq!(sentences.len(), 1);
//! assert_eq!(sentences[0].raw_text(), "buy rice");
//! ```

#![warn(missing_docs)]

pub mod conllu;
pub mod udpipe;

use spendy_domain::traits::Annotator;
use spendy_domain::Sentence;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;

pub use conllu::parse_conllu;
pub use udpipe::UdpipeAnnotator;

/// Errors that can occur during annotation
#[derive(Error, Debug)]
pub enum AnnotatorError {
    /// Network or service communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// The service answered with something other than a parse
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A CoNLL-U line could not be read
    #[error("Malformed CoNLL-U at line {line}: {reason}")]
    Malformed {
        /// 1-based line number in the document
        line: usize,
        /// What was wrong with it
        reason: String,
    },
}

/// Mock annotator for deterministic testing
///
/// Returns the same sentences for every text, or fails every call.
#[derive(Debug, Clone)]
pub struct MockAnnotator {
    sentences: Option<Vec<Sentence>>,
    calls: Arc<AtomicUsize>,
}

impl MockAnnotator {
    /// Create an annotator that always returns `sentences`
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self {
            sentences: Some(sentences),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create an annotator that returns the sentences of a CoNLL-U document
    pub fn from_conllu(document: &str) -> Result<Self, AnnotatorError> {
        Ok(Self::new(parse_conllu(document)?))
    }

    /// Create an annotator whose every call fails
    pub fn unreachable() -> Self {
        Self {
            sentences: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times annotate was called
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Annotator for MockAnnotator {
    type Error = AnnotatorError;

    fn annotate(&self, _text: &str) -> Result<Vec<Sentence>, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sentences
            .clone()
            .ok_or_else(|| AnnotatorError::Communication("Mock annotator unreachable".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "1 rice rice NOUN NN _ 0 root _ _\n";

    #[test]
    fn test_mock_returns_sentences() {
        let annotator = MockAnnotator::from_conllu(DOC).unwrap();
        let sentences = annotator.annotate("anything").unwrap();
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].tokens()[0].word, "rice");
    }

    #[test]
    fn test_mock_counts_calls_across_clones() {
        let annotator = MockAnnotator::new(Vec::new());
        let clone = annotator.clone();
        annotator.annotate("a").unwrap();
        clone.annotate("b").unwrap();
        assert_eq!(annotator.call_count(), 2);
    }

    #[test]
    fn test_mock_unreachable() {
        let annotator = MockAnnotator::unreachable();
        assert!(matches!(
            annotator.annotate("text"),
            Err(AnnotatorError::Communication(_))
        ));
        assert_eq!(annotator.call_count(), 1);
    }
}
