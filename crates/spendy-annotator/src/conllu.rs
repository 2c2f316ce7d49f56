//! CoNLL-U reader
//!
//! Reads the ten-column CoNLL-U format emitted by UDPipe, Stanza and other
//! Universal Dependencies parsers into domain sentences.

use crate::AnnotatorError;
use spendy_domain::{DependencyGraph, Sentence, Token};

const MIN_COLUMNS: usize = 8;

/// Parse a CoNLL-U document into sentences
///
/// Blank lines separate sentences and `#` lines are comments; the
/// `# text = ...` comment supplies the raw sentence text. Without it the text
/// is rebuilt from the word forms, honoring `SpaceAfter=No`.
///
/// Multiword token ranges (`1-2`) and empty nodes (`1.1`) are skipped.
/// Columns are tab-separated; a line without tabs is split on whitespace.
///
/// # Errors
///
/// Returns [`AnnotatorError::Malformed`] for rows with missing columns,
/// non-numeric ids or heads, and heads that name no token.
pub fn parse_conllu(document: &str) -> Result<Vec<Sentence>, AnnotatorError> {
    let mut sentences = Vec::new();
    let mut block = Block::default();

    for (offset, line) in document.lines().enumerate() {
        let line_no = offset + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            if let Some(sentence) = block.finish()? {
                sentences.push(sentence);
            }
            block = Block::default();
            continue;
        }

        if let Some(comment) = trimmed.strip_prefix('#') {
            if let Some(text) = comment.trim_start().strip_prefix("text =") {
                block.text = Some(text.trim().to_string());
            }
            continue;
        }

        if let Some(row) = Row::parse(line_no, trimmed)? {
            block.rows.push(row);
        }
    }

    if let Some(sentence) = block.finish()? {
        sentences.push(sentence);
    }

    Ok(sentences)
}

/// Lines of one sentence collected so far
#[derive(Default)]
struct Block {
    text: Option<String>,
    rows: Vec<Row>,
}

impl Block {
    fn finish(&mut self) -> Result<Option<Sentence>, AnnotatorError> {
        let Some(first_line) = self.rows.first().map(|r| r.line) else {
            return Ok(None);
        };

        let tokens = self.rows.iter().map(Row::token).collect();
        let mut graph = DependencyGraph::new(tokens).map_err(|reason| AnnotatorError::Malformed {
            line: first_line,
            reason,
        })?;

        for row in &self.rows {
            let added = if row.head == 0 {
                // Keep the first root when a parser emits several
                if graph.root().is_none() {
                    graph.set_root(row.index)
                } else {
                    Ok(())
                }
            } else {
                graph.add_edge(row.head, row.relation.as_str(), row.index)
            };
            added.map_err(|reason| AnnotatorError::Malformed {
                line: row.line,
                reason,
            })?;
        }

        let text = self.text.take().unwrap_or_else(|| self.rebuild_text());
        Ok(Some(Sentence::new(text, graph)))
    }

    fn rebuild_text(&self) -> String {
        let mut text = String::new();
        for row in &self.rows {
            text.push_str(&row.word);
            if row.space_after {
                text.push(' ');
            }
        }
        text.trim_end().to_string()
    }
}

/// One word line
struct Row {
    line: usize,
    index: usize,
    word: String,
    lemma: String,
    tag: String,
    ner: Option<String>,
    head: usize,
    relation: String,
    space_after: bool,
}

impl Row {
    /// Parse a word line; `None` for multiword ranges and empty nodes
    fn parse(line: usize, text: &str) -> Result<Option<Self>, AnnotatorError> {
        let columns: Vec<&str> = if text.contains('\t') {
            text.split('\t').collect()
        } else {
            text.split_whitespace().collect()
        };

        let malformed = |reason: String| AnnotatorError::Malformed { line, reason };

        if columns.len() < MIN_COLUMNS {
            return Err(malformed(format!(
                "expected at least {} columns, found {}",
                MIN_COLUMNS,
                columns.len()
            )));
        }

        let id = columns[0];
        if id.contains('-') || id.contains('.') {
            return Ok(None);
        }

        let index: usize = id
            .parse()
            .map_err(|_| malformed(format!("invalid token id '{}'", id)))?;
        let head: usize = columns[6]
            .parse()
            .map_err(|_| malformed(format!("invalid head '{}'", columns[6])))?;

        let word = columns[1].to_string();
        let lemma = match columns[2] {
            "_" if word != "_" => word.clone(),
            lemma => lemma.to_string(),
        };
        let tag = match columns[4] {
            "_" => penn_tag(columns[3]).to_string(),
            xpos => xpos.to_string(),
        };

        let misc = columns.get(9).copied().unwrap_or("_");
        let ner = misc_value(misc, "NER").map(str::to_string);
        let space_after = misc_value(misc, "SpaceAfter") != Some("No");

        Ok(Some(Self {
            line,
            index,
            word,
            lemma,
            tag,
            ner,
            head,
            relation: columns[7].to_string(),
            space_after,
        }))
    }

    fn token(&self) -> Token {
        let token = Token::new(self.index, &self.word, &self.lemma, &self.tag);
        match &self.ner {
            Some(ner) => token.with_ner(ner),
            None => token,
        }
    }
}

fn misc_value<'a>(misc: &'a str, key: &str) -> Option<&'a str> {
    misc.split('|').find_map(|entry| {
        entry
            .split_once('=')
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| v)
    })
}

/// Approximate Penn Treebank tag for a Universal POS tag
fn penn_tag(upos: &str) -> &'static str {
    match upos {
        "VERB" | "AUX" => "VB",
        "NOUN" => "NN",
        "PROPN" => "NNP",
        "ADJ" => "JJ",
        "ADV" => "RB",
        "NUM" => "CD",
        "PRON" => "PRP",
        "DET" => "DT",
        "ADP" | "SCONJ" => "IN",
        "CCONJ" => "CC",
        "PART" => "RP",
        "INTJ" => "UH",
        "PUNCT" => ".",
        "SYM" => "SYM",
        _ => "FW",
    }
}
