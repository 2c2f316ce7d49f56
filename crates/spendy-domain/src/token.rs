//! Token module - one annotated word of a sentence

use std::fmt;

/// Penn Treebank tags that denote nouns
pub const NOMINAL_TAGS: [&str; 4] = ["NN", "NNS", "NNP", "NNPS"];

/// Prefix shared by every Penn Treebank verb tag (VB, VBD, VBZ, ...)
pub const VERB_TAG_PREFIX: &str = "VB";

/// A single token produced by the linguistic annotator
///
/// Tokens are immutable once produced. The index is the 1-based position of
/// the token in its sentence and doubles as its node id in the dependency graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// 1-based position in the sentence
    pub index: usize,

    /// Surface form as it appeared in the text
    pub word: String,

    /// Base form
    pub lemma: String,

    /// Part-of-speech tag (Penn Treebank-like)
    pub tag: String,

    /// Named-entity tag, when the annotator provides one
    pub ner: Option<String>,
}

impl Token {
    /// Create a token without a named-entity tag
    ///
    /// # Examples
    ///
    /// ```
    /// use spendy_domain::Token;
    ///
    /// let token = Token::new(2, "bought", "buy", "VBD");
    /// assert!(token.is_verb());
    /// assert!(!token.is_nominal());
    /// ```
    pub fn new(
        index: usize,
        word: impl Into<String>,
        lemma: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            index,
            word: word.into(),
            lemma: lemma.into(),
            tag: tag.into(),
            ner: None,
        }
    }

    /// Attach a named-entity tag
    pub fn with_ner(mut self, ner: impl Into<String>) -> Self {
        self.ner = Some(ner.into());
        self
    }

    /// True if the POS tag marks a verb
    pub fn is_verb(&self) -> bool {
        self.tag.starts_with(VERB_TAG_PREFIX)
    }

    /// True if the POS tag is one of the common or proper noun tags
    pub fn is_nominal(&self) -> bool {
        NOMINAL_TAGS.contains(&self.tag.as_str())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}/{}", self.word, self.index, self.tag)
    }
}
