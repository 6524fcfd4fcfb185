//! Diff graph construction.

use super::classification::{compare_properties, Classification, GraphSide, PropertyChange};
use super::graph::{DiffEdge, DiffGraph, DiffNode};
use crate::color::{ColorBucket, ColorRegistry};
use crate::config::DiffConfig;
use crate::error::{ErrorContext, Result};
use crate::model::{Concept, ConceptEdge, ConceptGraph, EdgeKey};
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

/// Matching outcome for one node or edge, before colors are assigned.
struct Matched {
    side: GraphSide,
    classification: Classification,
    property_changes: Vec<PropertyChange>,
}

/// Builds a [`DiffGraph`] from a left and a right [`ConceptGraph`].
///
/// Both inputs are validated completely before anything is matched or
/// colored, so a failed build leaves no trace in the color registry.
pub struct DiffGraphBuilder {
    config: DiffConfig,
    registry: Arc<ColorRegistry>,
}

impl DiffGraphBuilder {
    /// Create a builder using the default configuration and the
    /// process-wide color registry
    pub fn new() -> Self {
        Self {
            config: DiffConfig::default(),
            registry: ColorRegistry::global(),
        }
    }

    /// Set the comparison configuration
    #[must_use]
    pub fn with_config(mut self, config: DiffConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a specific color registry, e.g. one isolated per comparison
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<ColorRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<ColorRegistry> {
        &self.registry
    }

    /// Compare `left` and `right`.
    ///
    /// Fails with a malformed-input error on duplicate codes or edge triples
    /// within one side, or on an edge whose endpoint exists in neither input.
    pub fn build(&self, left: &ConceptGraph, right: &ConceptGraph) -> Result<DiffGraph> {
        let context = || {
            format!(
                "comparing {} and {}",
                left.name.as_deref().unwrap_or("left"),
                right.name.as_deref().unwrap_or("right")
            )
        };
        let left_concepts = Self::index_concepts(left, GraphSide::Left).with_context(context)?;
        let right_concepts = Self::index_concepts(right, GraphSide::Right).with_context(context)?;

        let known = |code: &str| left_concepts.contains_key(code) || right_concepts.contains_key(code);
        left.check_edges(GraphSide::Left, known)
            .with_context(context)?;
        right
            .check_edges(GraphSide::Right, known)
            .with_context(context)?;

        let nodes = self.build_nodes(left, right, &left_concepts, &right_concepts);
        let edges = self.build_edges(left, right);
        let graph = DiffGraph::from_parts(left.name.clone(), right.name.clone(), nodes, edges);

        let summary = graph.summary();
        tracing::info!(
            "Built diff graph, {} vertices, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        tracing::info!(
            "only in left graph: {} concepts, only in right graph: {} concepts, changed: {}",
            summary.nodes.removed,
            summary.nodes.added,
            summary.nodes.changed
        );
        tracing::debug!(
            "affected edges ({}): {}",
            summary.edges.changes(),
            graph
                .affected_edges()
                .iter()
                .take(5)
                .map(|e| e.key.to_string())
                .collect::<Vec<_>>()
                .join("; ")
        );

        Ok(graph)
    }

    fn index_concepts(graph: &ConceptGraph, side: GraphSide) -> Result<HashMap<&str, &Concept>> {
        // fails on the first duplicate code
        graph.unique_codes(side)?;
        Ok(graph
            .concepts
            .iter()
            .map(|c| (c.code.as_str(), c))
            .collect())
    }

    fn build_nodes(
        &self,
        left: &ConceptGraph,
        right: &ConceptGraph,
        left_concepts: &HashMap<&str, &Concept>,
        right_concepts: &HashMap<&str, &Concept>,
    ) -> Vec<DiffNode> {
        let codes: Vec<&str> = left
            .concepts
            .iter()
            .map(|c| c.code.as_str())
            .chain(
                right
                    .concepts
                    .iter()
                    .map(|c| c.code.as_str())
                    .filter(|code| !left_concepts.contains_key(code)),
            )
            .collect();

        let matched: Vec<Matched> = codes
            .par_iter()
            .map(|code| {
                self.match_concept(
                    left_concepts.get(code).copied(),
                    right_concepts.get(code).copied(),
                )
            })
            .collect();

        // colors are assigned sequentially so the first-seen order is the
        // node order
        codes
            .into_iter()
            .zip(matched)
            .map(|(code, m)| DiffNode {
                code: code.to_string(),
                side: m.side,
                classification: m.classification,
                display_left: left_concepts.get(code).and_then(|c| c.display.clone()),
                display_right: right_concepts.get(code).and_then(|c| c.display.clone()),
                property_changes: m.property_changes,
                color: self
                    .registry
                    .color_for(ColorBucket::Classification, m.classification.as_str()),
                side_color: self.registry.color_for(ColorBucket::Side, m.side.as_str()),
            })
            .collect()
    }

    fn match_concept(&self, left: Option<&Concept>, right: Option<&Concept>) -> Matched {
        match (left, right) {
            (Some(l), Some(r)) => {
                let mut changes =
                    compare_properties(&l.properties, &r.properties, &self.config.ignored_properties);
                let display_differs = self.config.compare_display && l.display != r.display;
                let differs = display_differs || !changes.is_empty();
                if display_differs {
                    changes.insert(
                        0,
                        PropertyChange {
                            property: DISPLAY_PROPERTY.to_string(),
                            left: l.display.clone(),
                            right: r.display.clone(),
                        },
                    );
                }
                Matched {
                    side: GraphSide::Both,
                    classification: Classification::classify(GraphSide::Both, differs),
                    property_changes: changes,
                }
            }
            (l, _) => {
                let side = if l.is_some() {
                    GraphSide::Left
                } else {
                    GraphSide::Right
                };
                Matched {
                    side,
                    classification: Classification::classify(side, false),
                    property_changes: Vec::new(),
                }
            }
        }
    }

    fn build_edges(&self, left: &ConceptGraph, right: &ConceptGraph) -> Vec<DiffEdge> {
        let left_edges: HashMap<EdgeKey, &ConceptEdge> =
            left.edges.iter().map(|e| (e.key(), e)).collect();
        let right_edges: HashMap<EdgeKey, &ConceptEdge> =
            right.edges.iter().map(|e| (e.key(), e)).collect();

        let keys: Vec<EdgeKey> = left
            .edges
            .iter()
            .map(ConceptEdge::key)
            .chain(
                right
                    .edges
                    .iter()
                    .map(ConceptEdge::key)
                    .filter(|key| !left_edges.contains_key(key)),
            )
            .collect();

        let matched: Vec<Matched> = keys
            .par_iter()
            .map(|key| {
                let side =
                    GraphSide::from_membership(left_edges.contains_key(key), right_edges.contains_key(key))
                        .unwrap_or(GraphSide::Both);
                let property_changes = match (left_edges.get(key), right_edges.get(key)) {
                    (Some(l), Some(r)) => compare_properties(
                        &l.properties,
                        &r.properties,
                        &self.config.ignored_properties,
                    ),
                    _ => Vec::new(),
                };
                Matched {
                    side,
                    classification: Classification::classify(side, !property_changes.is_empty()),
                    property_changes,
                }
            })
            .collect();

        keys.into_iter()
            .zip(matched)
            .map(|(key, m)| {
                let relationship_color = self
                    .registry
                    .color_for(ColorBucket::Relationship, &key.relationship);
                DiffEdge {
                    key,
                    side: m.side,
                    classification: m.classification,
                    property_changes: m.property_changes,
                    color: self
                        .registry
                        .color_for(ColorBucket::Classification, m.classification.as_str()),
                    side_color: self.registry.color_for(ColorBucket::Side, m.side.as_str()),
                    relationship_color,
                }
            })
            .collect()
    }
}

/// Pseudo property code under which display differences are reported when
/// display text takes part in classification.
pub const DISPLAY_PROPERTY: &str = "display";

impl Default for DiffGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
