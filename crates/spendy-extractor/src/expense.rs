//! Grammar-driven expense candidate extraction

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::patterns::{match_price, match_quantity};
use crate::resolver::{conjoined_nouns, extract_modifiers, product_phrase};
use crate::strategy::SentenceStrategy;
use rayon::prelude::*;
use spendy_domain::traits::Annotator;
use spendy_domain::{DependencyGraph, ExpenseCandidate, Sentence, Token};
use std::collections::HashSet;
use std::fmt::Display;
use tracing::{debug, info, warn};

const OBJECT_RELATION: &str = "obj";

/// Turns a transcript into (product, quantity, price) candidates
pub struct ExpenseExtractor<A>
where
    A: Annotator,
{
    annotator: A,
    config: ExtractorConfig,
    verbs: HashSet<String>,
}

impl<A> ExpenseExtractor<A>
where
    A: Annotator,
    A::Error: Display,
{
    /// Create a new extractor
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError::Config`] if `config` does not validate.
    pub fn new(annotator: A, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        let verbs = config
            .acquisition_verbs
            .iter()
            .map(|v| v.trim().to_lowercase())
            .collect();

        Ok(Self {
            annotator,
            config,
            verbs,
        })
    }

    /// Extract candidates from a whole transcript
    ///
    /// Sentence order and within-sentence emission order are preserved.
    /// Repeated mentions across sentences are kept.
    ///
    /// # Errors
    ///
    /// Returns error if the transcript exceeds the configured length or the
    /// annotator fails.
    pub fn extract(&self, transcript: &str) -> Result<Vec<ExpenseCandidate>, ExtractorError> {
        if transcript.len() > self.config.max_transcript_length {
            return Err(ExtractorError::TranscriptTooLong(
                transcript.len(),
                self.config.max_transcript_length,
            ));
        }

        if transcript.trim().is_empty() {
            debug!("Empty transcript, nothing to annotate");
            return Ok(Vec::new());
        }

        let sentences = self.annotator.annotate(transcript).map_err(|e| {
            warn!("Annotator failed: {}", e);
            ExtractorError::Annotator(e.to_string())
        })?;

        let candidates = self.extract_sentences(&sentences);

        info!(
            "Extracted {} expense candidates from {} sentences",
            candidates.len(),
            sentences.len()
        );

        Ok(candidates)
    }

    /// Extract candidates from already annotated sentences
    pub fn extract_sentences(&self, sentences: &[Sentence]) -> Vec<ExpenseCandidate> {
        let verbs = &self.verbs;
        if self.config.parallel_sentences {
            // Indexed collect keeps sentence order
            let per_sentence: Vec<Vec<ExpenseCandidate>> = sentences
                .par_iter()
                .map(|sentence| extract_sentence(sentence, verbs))
                .collect();
            per_sentence.into_iter().flatten().collect()
        } else {
            sentences
                .iter()
                .flat_map(|sentence| extract_sentence(sentence, verbs))
                .collect()
        }
    }
}

/// Extract candidates from one sentence
pub(crate) fn extract_sentence(sentence: &Sentence, verbs: &HashSet<String>) -> Vec<ExpenseCandidate> {
    let strategy = SentenceStrategy::for_sentence(sentence);
    let graph = sentence.dependency_graph();

    let heads = match strategy {
        SentenceStrategy::VerbObject => object_heads(graph, verbs),
        SentenceStrategy::NounPhrase => root_heads(graph),
    };

    debug!(
        "Sentence '{}' ({}): {} product heads",
        sentence.raw_text(),
        strategy,
        heads.len()
    );

    if heads.is_empty() {
        return Vec::new();
    }

    let text = sentence.raw_text();
    let quantity = match_quantity(text);
    let price = match_price(text);

    heads
        .into_iter()
        .map(|head| {
            let product = product_phrase(&extract_modifiers(head, graph));
            ExpenseCandidate::new(product, quantity.clone(), price.clone())
        })
        .collect()
}

/// Objects of acquisition verbs and their conjuncts, in edge order
fn object_heads<'g>(graph: &'g DependencyGraph, verbs: &HashSet<String>) -> Vec<&'g Token> {
    let mut heads = Vec::new();
    for edge in graph.edges_sorted() {
        if edge.relation != OBJECT_RELATION {
            continue;
        }
        let (Some(verb), Some(object)) = (graph.governor(edge), graph.dependent(edge)) else {
            continue;
        };
        if !verbs.contains(&verb.lemma.to_lowercase()) {
            debug!("Skipping object of non-acquisition verb '{}'", verb.lemma);
            continue;
        }
        extend_unique(&mut heads, conjoined_nouns(object, graph));
    }
    heads
}

/// The root and its conjuncts; nothing without a root
fn root_heads(graph: &DependencyGraph) -> Vec<&Token> {
    let mut heads = Vec::new();
    if let Some(root) = graph.root() {
        extend_unique(&mut heads, conjoined_nouns(root, graph));
    }
    heads
}

fn extend_unique<'g>(heads: &mut Vec<&'g Token>, found: Vec<&'g Token>) {
    for token in found {
        if !heads.iter().any(|h| h.index == token.index) {
            heads.push(token);
        }
    }
}
