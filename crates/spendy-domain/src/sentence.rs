//! Sentence module - raw text paired with its dependency parse

use crate::graph::DependencyGraph;
use crate::token::Token;

/// One annotated sentence of a transcript
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    text: String,
    graph: DependencyGraph,
}

impl Sentence {
    /// Create a sentence from its raw text and parse
    pub fn new(text: impl Into<String>, graph: DependencyGraph) -> Self {
        Self {
            text: text.into(),
            graph,
        }
    }

    /// Raw sentence text as it appeared in the transcript
    pub fn raw_text(&self) -> &str {
        &self.text
    }

    /// Tokens in sentence order
    pub fn tokens(&self) -> &[Token] {
        self.graph.tokens()
    }

    /// The dependency parse
    pub fn dependency_graph(&self) -> &DependencyGraph {
        &self.graph
    }
}
