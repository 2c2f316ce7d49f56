//! Dependency graph over the tokens of one sentence
//!
//! The graph is an arena: tokens are stored by their 1-based index, edges
//! hold governor/dependent indices, and each node keeps the positions of its
//! outgoing edges in the edge list.

use crate::token::Token;

/// A typed, directed edge between two tokens of the same sentence
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyEdge {
    /// Relation label (e.g. "obj", "amod", "compound", "conj")
    pub relation: String,

    /// Index of the governing token
    pub governor: usize,

    /// Index of the dependent token
    pub dependent: usize,
}

/// Dependency graph for a single sentence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyGraph {
    tokens: Vec<Token>,
    edges: Vec<DependencyEdge>,
    // outgoing[i] holds positions in `edges`; slot 0 is unused
    outgoing: Vec<Vec<usize>>,
    root: Option<usize>,
}

impl DependencyGraph {
    /// Create a graph with no edges from tokens in sentence order
    ///
    /// Token indices must run 1, 2, 3, ... without gaps.
    ///
    /// # Examples
    ///
    /// ```
    /// use spendy_domain::{DependencyGraph, Token};
    ///
    /// let mut graph = DependencyGraph::new(vec![
    ///     Token::new(1, "buy", "buy", "VB"),
    ///     Token::new(2, "rice", "rice", "NN"),
    /// ]).unwrap();
    /// graph.add_edge(1, "obj", 2).unwrap();
    /// graph.set_root(1).unwrap();
    ///
    /// assert_eq!(graph.root().unwrap().word, "buy");
    /// assert_eq!(graph.outgoing_edges(1).count(), 1);
    /// ```
    pub fn new(tokens: Vec<Token>) -> Result<Self, String> {
        for (position, token) in tokens.iter().enumerate() {
            if token.index != position + 1 {
                return Err(format!(
                    "token '{}' has index {} but sits at position {}",
                    token.word,
                    token.index,
                    position + 1
                ));
            }
        }

        let outgoing = vec![Vec::new(); tokens.len() + 1];
        Ok(Self {
            tokens,
            edges: Vec::new(),
            outgoing,
            root: None,
        })
    }

    /// Add an edge `governor --relation--> dependent`
    pub fn add_edge(
        &mut self,
        governor: usize,
        relation: impl Into<String>,
        dependent: usize,
    ) -> Result<(), String> {
        self.check_index(governor)?;
        self.check_index(dependent)?;

        self.outgoing[governor].push(self.edges.len());
        self.edges.push(DependencyEdge {
            relation: relation.into(),
            governor,
            dependent,
        });
        Ok(())
    }

    /// Designate the root token
    pub fn set_root(&mut self, index: usize) -> Result<(), String> {
        self.check_index(index)?;
        self.root = Some(index);
        Ok(())
    }

    /// All tokens in sentence order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Look up a token by its 1-based index
    pub fn token(&self, index: usize) -> Option<&Token> {
        index.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// The root token, if the annotator designated one
    pub fn root(&self) -> Option<&Token> {
        self.root.and_then(|i| self.token(i))
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[DependencyEdge] {
        &self.edges
    }

    /// Edges ordered by governor index, then dependent index, then insertion
    pub fn edges_sorted(&self) -> Vec<&DependencyEdge> {
        let mut sorted: Vec<&DependencyEdge> = self.edges.iter().collect();
        // sort_by_key is stable, so insertion order breaks ties
        sorted.sort_by_key(|edge| (edge.governor, edge.dependent));
        sorted
    }

    /// Edges leaving the token at `index`, in insertion order
    pub fn outgoing_edges(&self, index: usize) -> impl Iterator<Item = &DependencyEdge> + '_ {
        self.outgoing
            .get(index)
            .into_iter()
            .flatten()
            .filter_map(move |&position| self.edges.get(position))
    }

    /// Governor token of an edge
    pub fn governor(&self, edge: &DependencyEdge) -> Option<&Token> {
        self.token(edge.governor)
    }

    /// Dependent token of an edge
    pub fn dependent(&self, edge: &DependencyEdge) -> Option<&Token> {
        self.token(edge.dependent)
    }

    fn check_index(&self, index: usize) -> Result<(), String> {
        if index == 0 || index > self.tokens.len() {
            return Err(format!(
                "token index {} out of range 1..={}",
                index,
                self.tokens.len()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn porsche_graph() -> DependencyGraph {
        let mut graph = DependencyGraph::new(vec![
            Token::new(1, "He", "he", "PRP"),
            Token::new(2, "bought", "buy", "VBD"),
            Token::new(3, "a", "a", "DT"),
            Token::new(4, "Porsche", "Porsche", "NNP"),
            Token::new(5, "911", "911", "CD"),
        ])
        .unwrap();
        graph.add_edge(2, "nsubj", 1).unwrap();
        graph.add_edge(4, "det", 3).unwrap();
        graph.add_edge(4, "compound", 5).unwrap();
        graph.add_edge(2, "obj", 4).unwrap();
        graph.set_root(2).unwrap();
        graph
    }

    #[test]
    fn test_rejects_gapped_indices() {
        let result = DependencyGraph::new(vec![
            Token::new(1, "a", "a", "DT"),
            Token::new(3, "b", "b", "NN"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_out_of_range_edges() {
        let mut graph = porsche_graph();
        assert!(graph.add_edge(2, "obj", 9).is_err());
        assert!(graph.add_edge(0, "obj", 1).is_err());
        assert!(graph.set_root(6).is_err());
        assert_eq!(graph.edges().len(), 4);
    }

    #[test]
    fn test_token_lookup() {
        let graph = porsche_graph();
        assert_eq!(graph.token(4).unwrap().word, "Porsche");
        assert!(graph.token(0).is_none());
        assert!(graph.token(6).is_none());
    }

    #[test]
    fn test_root() {
        let graph = porsche_graph();
        assert_eq!(graph.root().unwrap().lemma, "buy");

        let unrooted = DependencyGraph::new(vec![Token::new(1, "rice", "rice", "NN")]).unwrap();
        assert!(unrooted.root().is_none());
    }

    #[test]
    fn test_outgoing_edges() {
        let graph = porsche_graph();
        let relations: Vec<&str> = graph
            .outgoing_edges(2)
            .map(|e| e.relation.as_str())
            .collect();
        assert_eq!(relations, vec!["nsubj", "obj"]);
        assert_eq!(graph.outgoing_edges(5).count(), 0);
        assert_eq!(graph.outgoing_edges(42).count(), 0);
    }

    #[test]
    fn test_edges_sorted() {
        let graph = porsche_graph();
        let order: Vec<(usize, usize)> = graph
            .edges_sorted()
            .iter()
            .map(|e| (e.governor, e.dependent))
            .collect();
        assert_eq!(order, vec![(2, 1), (2, 4), (4, 3), (4, 5)]);
    }

    proptest::proptest! {
        #[test]
        fn prop_adjacency_matches_edge_list(
            pairs in proptest::collection::vec((1usize..=6, 1usize..=6), 0..20)
        ) {
            let tokens = (1..=6).map(|i| Token::new(i, format!("w{i}"), "w", "NN")).collect();
            let mut graph = DependencyGraph::new(tokens).unwrap();
            for (governor, dependent) in &pairs {
                graph.add_edge(*governor, "dep", *dependent).unwrap();
            }

            let total: usize = (1..=6).map(|i| graph.outgoing_edges(i).count()).sum();
            proptest::prop_assert_eq!(total, pairs.len());

            let sorted = graph.edges_sorted();
            for window in sorted.windows(2) {
                proptest::prop_assert!(
                    (window[0].governor, window[0].dependent) <= (window[1].governor, window[1].dependent)
                );
            }
        }
    }

    #[test]
    fn test_edge_endpoints() {
        let graph = porsche_graph();
        let obj = graph.edges().iter().find(|e| e.relation == "obj").unwrap();
        assert_eq!(graph.governor(obj).unwrap().word, "bought");
        assert_eq!(graph.dependent(obj).unwrap().word, "Porsche");
    }
}
