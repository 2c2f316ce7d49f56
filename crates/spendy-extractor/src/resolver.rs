//! Modifier and coordination resolution over a dependency graph

use crate::vocabulary::is_quantity_unit;
use spendy_domain::{DependencyGraph, Token};

const MODIFIER_RELATIONS: [&str; 2] = ["amod", "compound"];
const CONJUNCT_RELATION: &str = "conj";

/// The head plus its adjectival and compound modifiers
///
/// Modifiers whose surface form is a quantity unit ("kg", "liter", ...) are
/// left out. The head is always first; modifiers follow in edge order.
pub fn extract_modifiers<'g>(head: &'g Token, graph: &'g DependencyGraph) -> Vec<&'g Token> {
    let mut tokens = vec![head];
    for edge in graph.outgoing_edges(head.index) {
        if !MODIFIER_RELATIONS.contains(&edge.relation.as_str()) {
            continue;
        }
        if let Some(modifier) = graph.dependent(edge) {
            if !is_quantity_unit(&modifier.word) {
                push_unique(&mut tokens, modifier);
            }
        }
    }
    tokens
}

/// The noun plus every noun coordinated with it through a `conj` edge
pub fn conjoined_nouns<'g>(noun: &'g Token, graph: &'g DependencyGraph) -> Vec<&'g Token> {
    let mut nouns = vec![noun];
    for edge in graph.outgoing_edges(noun.index) {
        if edge.relation != CONJUNCT_RELATION {
            continue;
        }
        if let Some(conjunct) = graph.dependent(edge) {
            if conjunct.is_nominal() {
                push_unique(&mut nouns, conjunct);
            }
        }
    }
    nouns
}

/// Words joined by single spaces in sentence order
pub fn product_phrase(tokens: &[&Token]) -> String {
    let mut ordered = tokens.to_vec();
    ordered.sort_by_key(|t| t.index);
    ordered
        .iter()
        .map(|t| t.word.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_unique<'g>(tokens: &mut Vec<&'g Token>, token: &'g Token) {
    if !tokens.iter().any(|t| t.index == token.index) {
        tokens.push(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // "fresh red kg apples and pears or run"
    fn graph() -> DependencyGraph {
        let mut graph = DependencyGraph::new(vec![
            Token::new(1, "fresh", "fresh", "JJ"),
            Token::new(2, "red", "red", "JJ"),
            Token::new(3, "kg", "kg", "NN"),
            Token::new(4, "apples", "apple", "NNS"),
            Token::new(5, "and", "and", "CC"),
            Token::new(6, "pears", "pear", "NNS"),
            Token::new(7, "or", "or", "CC"),
            Token::new(8, "run", "run", "VB"),
        ])
        .unwrap();
        graph.set_root(4).unwrap();
        graph.add_edge(4, "amod", 2).unwrap();
        graph.add_edge(4, "amod", 1).unwrap();
        graph.add_edge(4, "compound", 3).unwrap();
        graph.add_edge(4, "conj", 6).unwrap();
        graph.add_edge(6, "cc", 5).unwrap();
        graph.add_edge(4, "conj", 8).unwrap();
        graph.add_edge(8, "cc", 7).unwrap();
        graph
    }

    #[test]
    fn test_modifiers_without_edges() {
        let graph = graph();
        let pears = graph.token(6).unwrap();
        let modifiers = extract_modifiers(pears, &graph);
        assert_eq!(modifiers.len(), 1);
        assert_eq!(modifiers[0].word, "pears");
    }

    #[test]
    fn test_modifiers_exclude_units() {
        let graph = graph();
        let apples = graph.token(4).unwrap();
        let words: Vec<_> = extract_modifiers(apples, &graph)
            .iter()
            .map(|t| t.word.as_str())
            .collect();
        assert_eq!(words, vec!["apples", "red", "fresh"]);
    }

    #[test]
    fn test_product_phrase_uses_sentence_order() {
        let graph = graph();
        let apples = graph.token(4).unwrap();
        let phrase = product_phrase(&extract_modifiers(apples, &graph));
        assert_eq!(phrase, "fresh red apples");
    }

    #[test]
    fn test_conjoined_nouns_only_nominal() {
        let graph = graph();
        let apples = graph.token(4).unwrap();
        let words: Vec<_> = conjoined_nouns(apples, &graph)
            .iter()
            .map(|t| t.word.as_str())
            .collect();
        assert_eq!(words, vec!["apples", "pears"]);
    }

    #[test]
    fn test_conjoined_nouns_without_conj() {
        let graph = graph();
        let pears = graph.token(6).unwrap();
        assert_eq!(conjoined_nouns(pears, &graph).len(), 1);
    }

    #[test]
    fn test_duplicate_edges_yield_one_modifier() {
        let mut graph = DependencyGraph::new(vec![
            Token::new(1, "red", "red", "JJ"),
            Token::new(2, "car", "car", "NN"),
        ])
        .unwrap();
        graph.add_edge(2, "amod", 1).unwrap();
        graph.add_edge(2, "compound", 1).unwrap();
        let car = graph.token(2).unwrap();
        assert_eq!(extract_modifiers(car, &graph).len(), 2);
    }

    const WORDS: &[&str] = &["red", "kg", "fresh", "Liters", "organic", "piece", "big", "ML"];

    proptest! {
        #[test]
        fn prop_modifier_included_iff_not_unit(
            picks in prop::collection::vec((0..WORDS.len(), prop::bool::ANY), 1..6)
        ) {
            let mut tokens = vec![Token::new(1, "head", "head", "NN")];
            for (i, (word, _)) in picks.iter().enumerate() {
                tokens.push(Token::new(i + 2, WORDS[*word], WORDS[*word], "JJ"));
            }
            let mut graph = DependencyGraph::new(tokens).unwrap();
            for (i, (_, is_amod)) in picks.iter().enumerate() {
                let relation = if *is_amod { "amod" } else { "compound" };
                graph.add_edge(1, relation, i + 2).unwrap();
            }

            let head = graph.token(1).unwrap();
            let modifiers = extract_modifiers(head, &graph);
            prop_assert_eq!(modifiers[0].index, 1);

            for (i, (word, _)) in picks.iter().enumerate() {
                let included = modifiers.iter().any(|t| t.index == i + 2);
                prop_assert_eq!(included, !is_quantity_unit(WORDS[*word]));
            }
        }

        #[test]
        fn prop_conjunct_included_iff_nominal(tags in prop::collection::vec("NN|NNS|NNP|NNPS|VB|JJ|CD", 1..6)) {
            let mut tokens = vec![Token::new(1, "head", "head", "NN")];
            for (i, tag) in tags.iter().enumerate() {
                tokens.push(Token::new(i + 2, "w", "w", tag.as_str()));
            }
            let mut graph = DependencyGraph::new(tokens).unwrap();
            for i in 0..tags.len() {
                graph.add_edge(1, "conj", i + 2).unwrap();
            }

            let head = graph.token(1).unwrap();
            let nouns = conjoined_nouns(head, &graph);
            prop_assert_eq!(nouns[0].index, 1);
            for (i, tag) in tags.iter().enumerate() {
                let included = nouns.iter().any(|t| t.index == i + 2);
                prop_assert_eq!(included, tag.starts_with("NN"));
            }
        }
    }
}
