//! Concept graph input structures.

use crate::diff::GraphSide;
use crate::error::{MalformedInputKind, Result, TermDiffError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// One coded entry of a terminology resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    /// The code, unique within one concept graph
    pub code: String,
    /// Human-readable display text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    /// Property code -> value
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

impl Concept {
    /// Create a concept without display text or properties
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display: None,
            properties: BTreeMap::new(),
        }
    }

    /// Set the display text
    #[must_use]
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    /// Add a property value
    #[must_use]
    pub fn with_property(mut self, code: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(code.into(), value.into());
        self
    }
}

/// Identity of an edge: the (source, target, relationship) triple.
///
/// Two edges between the same endpoints with different relationship codes
/// are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    pub source: String,
    pub target: String,
    pub relationship: String,
}

impl EdgeKey {
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        relationship: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            relationship: relationship.into(),
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' -> '{}' [{}]", self.source, self.target, self.relationship)
    }
}

/// A typed relation between two concepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptEdge {
    pub source: String,
    pub target: String,
    /// Relationship or property code, e.g. `parent` or `is-a`
    pub relationship: String,
    /// Edge-level properties
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

impl ConceptEdge {
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        relationship: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            relationship: relationship.into(),
            properties: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_property(mut self, code: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(code.into(), value.into());
        self
    }

    /// The triple identifying this edge
    #[must_use]
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(&self.source, &self.target, &self.relationship)
    }
}

/// One side's full set of concepts and their typed relations.
///
/// This is raw input as delivered by a terminology source: it may contain
/// duplicates or dangling edges. [`ConceptGraph::validate`] and the diff
/// builder reject those.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptGraph {
    /// Optional name of the resource version, used in log output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub concepts: Vec<Concept>,
    #[serde(default)]
    pub edges: Vec<ConceptEdge>,
}

impl ConceptGraph {
    /// Create an empty concept graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty named concept graph
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn add_concept(&mut self, concept: Concept) -> &mut Self {
        self.concepts.push(concept);
        self
    }

    pub fn add_edge(&mut self, edge: ConceptEdge) -> &mut Self {
        self.edges.push(edge);
        self
    }

    /// Look up a concept by code (first occurrence)
    #[must_use]
    pub fn concept(&self, code: &str) -> Option<&Concept> {
        self.concepts.iter().find(|c| c.code == code)
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.concept(code).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Check the per-side invariants: unique codes, unique edge triples,
    /// and edge endpoints that exist in this graph.
    ///
    /// `side` only labels the error.
    pub fn validate(&self, side: GraphSide) -> Result<()> {
        let codes = self.unique_codes(side)?;
        self.check_edges(side, |code| codes.contains(code))
    }

    /// Collect the code set, failing on the first duplicate.
    pub(crate) fn unique_codes(&self, side: GraphSide) -> Result<HashSet<&str>> {
        let mut codes = HashSet::with_capacity(self.concepts.len());
        for concept in &self.concepts {
            if !codes.insert(concept.code.as_str()) {
                return Err(TermDiffError::malformed(
                    format!("validating {side} input"),
                    MalformedInputKind::DuplicateCode {
                        side,
                        code: concept.code.clone(),
                    },
                ));
            }
        }
        Ok(codes)
    }

    /// Check edge triples for duplicates and endpoints against `known`.
    pub(crate) fn check_edges<F>(&self, side: GraphSide, known: F) -> Result<()>
    where
        F: Fn(&str) -> bool,
    {
        let mut seen = HashSet::with_capacity(self.edges.len());
        for edge in &self.edges {
            let key = edge.key();
            for endpoint in [&edge.source, &edge.target] {
                if !known(endpoint) {
                    return Err(TermDiffError::malformed(
                        format!("validating {side} input"),
                        MalformedInputKind::UnknownEndpoint {
                            side,
                            edge: key,
                            code: endpoint.clone(),
                        },
                    ));
                }
            }
            if !seen.insert(key) {
                return Err(TermDiffError::malformed(
                    format!("validating {side} input"),
                    MalformedInputKind::DuplicateEdge {
                        side,
                        edge: edge.key(),
                    },
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> ConceptGraph {
        let mut g = ConceptGraph::named("v1");
        g.add_concept(Concept::new("A").with_display("Alpha"))
            .add_concept(Concept::new("B"))
            .add_edge(ConceptEdge::new("A", "B", "is-a"));
        g
    }

    #[test]
    fn test_valid_graph() {
        let g = graph();
        assert!(g.validate(GraphSide::Left).is_ok());
        assert_eq!(g.len(), 2);
        assert!(g.contains("A"));
        assert_eq!(
            g.concept("A").and_then(|c| c.display.as_deref()),
            Some("Alpha")
        );
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let mut g = graph();
        g.add_concept(Concept::new("A"));
        let err = g.validate(GraphSide::Left).unwrap_err();
        assert_eq!(
            err.malformed_kind(),
            Some(&MalformedInputKind::DuplicateCode {
                side: GraphSide::Left,
                code: "A".to_string()
            })
        );
    }

    #[test]
    fn test_dangling_edge_rejected() {
        let mut g = graph();
        g.add_edge(ConceptEdge::new("B", "Q", "is-a"));
        let err = g.validate(GraphSide::Right).unwrap_err();
        match err.malformed_kind() {
            Some(MalformedInputKind::UnknownEndpoint { code, edge, side }) => {
                assert_eq!(code, "Q");
                assert_eq!(edge, &EdgeKey::new("B", "Q", "is-a"));
                assert_eq!(*side, GraphSide::Right);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_edge_rejected_but_multi_edge_allowed() {
        let mut g = graph();
        g.add_edge(ConceptEdge::new("A", "B", "part-of"));
        assert!(g.validate(GraphSide::Left).is_ok());

        g.add_edge(ConceptEdge::new("A", "B", "is-a"));
        assert!(matches!(
            g.validate(GraphSide::Left).unwrap_err().malformed_kind(),
            Some(MalformedInputKind::DuplicateEdge { .. })
        ));
    }

    #[test]
    fn test_edge_key_display() {
        assert_eq!(
            EdgeKey::new("A", "B", "is-a").to_string(),
            "'A' -> 'B' [is-a]"
        );
    }

    #[test]
    fn test_deserialize_minimal_json() {
        let g: ConceptGraph = serde_json::from_str(
            r#"{"concepts":[{"code":"A"},{"code":"B","properties":{"status":"active"}}],
                "edges":[{"source":"B","target":"A","relationship":"parent"}]}"#,
        )
        .expect("valid json");
        assert_eq!(g.len(), 2);
        assert_eq!(g.edges[0].key(), EdgeKey::new("B", "A", "parent"));
        assert_eq!(
            g.concept("B").and_then(|c| c.properties.get("status")).map(String::as_str),
            Some("active")
        );
    }
}
