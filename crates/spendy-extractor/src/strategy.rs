//! Per-sentence choice between the verb-object and noun-phrase strategies

use serde::Serialize;
use spendy_domain::Sentence;
use std::fmt;

/// How products are located in one sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentenceStrategy {
    /// Direct objects of acquisition verbs ("I bought rice")
    VerbObject,
    /// The root of a verbless phrase ("5 kg rice, $20")
    NounPhrase,
}

impl SentenceStrategy {
    /// Pick the strategy for `sentence`
    pub fn for_sentence(sentence: &Sentence) -> Self {
        if has_verb(sentence) {
            SentenceStrategy::VerbObject
        } else {
            SentenceStrategy::NounPhrase
        }
    }
}

impl fmt::Display for SentenceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentenceStrategy::VerbObject => write!(f, "verb-object"),
            SentenceStrategy::NounPhrase => write!(f, "noun-phrase"),
        }
    }
}

/// True if any token carries a verb tag
pub fn has_verb(sentence: &Sentence) -> bool {
    sentence.tokens().iter().any(|t| t.is_verb())
}
