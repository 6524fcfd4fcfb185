//! The classified difference graph.

use super::classification::{Classification, GraphSide, PropertyChange};
use crate::color::Color;
use crate::model::EdgeKey;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A code in the diff graph.
///
/// One node exists per distinct code across both inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffNode {
    pub code: String,
    pub side: GraphSide,
    pub classification: Classification,
    /// Display text in the left input, if the code exists there
    pub display_left: Option<String>,
    /// Display text in the right input, if the code exists there
    pub display_right: Option<String>,
    /// Property differences; empty unless both-sided
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub property_changes: Vec<PropertyChange>,
    /// Color of the classification bucket
    pub color: Color,
    /// Color of the side bucket
    pub side_color: Color,
}

impl DiffNode {
    /// Whether the display text differs between two present sides.
    ///
    /// Reported regardless of whether display text takes part in
    /// classification.
    #[must_use]
    pub fn display_changed(&self) -> bool {
        self.side == GraphSide::Both && self.display_left != self.display_right
    }

    /// Display text preferring the right (newer) side.
    #[must_use]
    pub fn display(&self) -> Option<&str> {
        self.display_right
            .as_deref()
            .or(self.display_left.as_deref())
    }
}

/// A (source, target, relationship) triple in the diff graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffEdge {
    #[serde(flatten)]
    pub key: EdgeKey,
    pub side: GraphSide,
    pub classification: Classification,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub property_changes: Vec<PropertyChange>,
    /// Color of the classification bucket
    pub color: Color,
    /// Color of the side bucket
    pub side_color: Color,
    /// Color of the relationship bucket, for relationship legends
    pub relationship_color: Color,
}

impl DiffEdge {
    #[must_use]
    pub fn source(&self) -> &str {
        &self.key.source
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.key.target
    }

    #[must_use]
    pub fn relationship(&self) -> &str {
        &self.key.relationship
    }

    /// Not on both sides, or on both sides with differing edge properties.
    #[must_use]
    pub fn is_affected(&self) -> bool {
        self.classification.is_change()
    }
}

/// Per-classification element counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationCounts {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
    pub changed: usize,
}

impl ClassificationCounts {
    fn record(&mut self, classification: Classification) {
        match classification {
            Classification::Added => self.added += 1,
            Classification::Removed => self.removed += 1,
            Classification::Unchanged => self.unchanged += 1,
            Classification::Changed => self.changed += 1,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.added + self.removed + self.unchanged + self.changed
    }

    #[must_use]
    pub const fn changes(&self) -> usize {
        self.added + self.removed + self.changed
    }
}

/// Summary of a diff graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub nodes: ClassificationCounts,
    pub edges: ClassificationCounts,
}

impl DiffSummary {
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.nodes.changes() + self.edges.changes() > 0
    }
}

/// Selection of node codes, mirroring the usual diff table filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DiffFilter {
    All,
    /// Added, removed or changed
    #[default]
    Different,
    /// Unchanged only
    Identical,
    OnlyLeft,
    OnlyRight,
    /// Present on both sides but changed
    OnlyChanged,
}

impl DiffFilter {
    #[must_use]
    pub fn matches(self, node: &DiffNode) -> bool {
        match self {
            Self::All => true,
            Self::Different => node.classification.is_change(),
            Self::Identical => node.classification == Classification::Unchanged,
            Self::OnlyLeft => node.side == GraphSide::Left,
            Self::OnlyRight => node.side == GraphSide::Right,
            Self::OnlyChanged => node.classification == Classification::Changed,
        }
    }
}

/// Directed multigraph of classified nodes and edges.
///
/// Built once by [`DiffGraphBuilder`](super::DiffGraphBuilder) and read-only
/// afterwards. Every edge's endpoints are nodes of the same graph.
#[derive(Debug, Clone, Serialize)]
pub struct DiffGraph {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) left_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) right_name: Option<String>,
    pub(crate) nodes: Vec<DiffNode>,
    pub(crate) edges: Vec<DiffEdge>,
    #[serde(skip)]
    node_index: HashMap<String, usize>,
    #[serde(skip)]
    edge_index: HashMap<EdgeKey, usize>,
    /// node index -> indices of edges touching it, in either direction
    #[serde(skip)]
    incidence: Vec<Vec<usize>>,
}

impl DiffGraph {
    /// Assemble a graph from nodes and edges whose endpoints were already
    /// checked against `nodes`.
    pub(crate) fn from_parts(
        left_name: Option<String>,
        right_name: Option<String>,
        nodes: Vec<DiffNode>,
        edges: Vec<DiffEdge>,
    ) -> Self {
        let node_index: HashMap<String, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.code.clone(), i))
            .collect();
        let edge_index = edges
            .iter()
            .enumerate()
            .map(|(i, e)| (e.key.clone(), i))
            .collect();

        let mut incidence = vec![Vec::new(); nodes.len()];
        for (i, edge) in edges.iter().enumerate() {
            let source = node_index[edge.source()];
            let target = node_index[edge.target()];
            incidence[source].push(i);
            if target != source {
                incidence[target].push(i);
            }
        }

        Self {
            left_name,
            right_name,
            nodes,
            edges,
            node_index,
            edge_index,
            incidence,
        }
    }

    /// Nodes in build order: left input order, then right-only codes.
    #[must_use]
    pub fn nodes(&self) -> &[DiffNode] {
        &self.nodes
    }

    /// Edges in build order.
    #[must_use]
    pub fn edges(&self) -> &[DiffEdge] {
        &self.edges
    }

    #[must_use]
    pub fn node(&self, code: &str) -> Option<&DiffNode> {
        self.node_index.get(code).map(|&i| &self.nodes[i])
    }

    #[must_use]
    pub fn edge(&self, key: &EdgeKey) -> Option<&DiffEdge> {
        self.edge_index.get(key).map(|&i| &self.edges[i])
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.node_index.contains_key(code)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn left_name(&self) -> Option<&str> {
        self.left_name.as_deref()
    }

    #[must_use]
    pub fn right_name(&self) -> Option<&str> {
        self.right_name.as_deref()
    }

    /// Edges touching `code` in either direction.
    pub fn edges_of<'a>(&'a self, code: &str) -> impl Iterator<Item = &'a DiffEdge> + 'a {
        let incident: &[usize] = self
            .node_index
            .get(code)
            .map_or(&[][..], |&i| self.incidence[i].as_slice());
        incident.iter().map(move |&e| &self.edges[e])
    }

    pub(crate) fn index_of(&self, code: &str) -> Option<usize> {
        self.node_index.get(code).copied()
    }

    pub(crate) fn incident(&self, node: usize) -> &[usize] {
        &self.incidence[node]
    }

    /// Index of the endpoint of `edge` opposite to `node` (itself for loops).
    pub(crate) fn opposite(&self, edge: usize, node: usize) -> usize {
        let e = &self.edges[edge];
        let source = self.node_index[e.source()];
        if source == node {
            self.node_index[e.target()]
        } else {
            source
        }
    }

    pub(crate) fn endpoints(&self, edge: usize) -> (usize, usize) {
        let e = &self.edges[edge];
        (self.node_index[e.source()], self.node_index[e.target()])
    }

    #[must_use]
    pub fn summary(&self) -> DiffSummary {
        let mut summary = DiffSummary::default();
        for node in &self.nodes {
            summary.nodes.record(node.classification);
        }
        for edge in &self.edges {
            summary.edges.record(edge.classification);
        }
        summary
    }

    /// Edges that are not unchanged, in graph order.
    #[must_use]
    pub fn affected_edges(&self) -> Vec<&DiffEdge> {
        self.edges.iter().filter(|e| e.is_affected()).collect()
    }

    /// Nodes that are not unchanged, plus endpoints of affected edges, in
    /// graph order.
    ///
    /// These are the natural focus candidates for a neighborhood view.
    #[must_use]
    pub fn affected_nodes(&self) -> Vec<&DiffNode> {
        let mut affected: Vec<bool> = self
            .nodes
            .iter()
            .map(|n| n.classification.is_change())
            .collect();
        for (i, edge) in self.edges.iter().enumerate() {
            if edge.is_affected() {
                let (source, target) = self.endpoints(i);
                affected[source] = true;
                affected[target] = true;
            }
        }
        self.nodes
            .iter()
            .zip(affected)
            .filter_map(|(node, hit)| hit.then_some(node))
            .collect()
    }

    /// Codes selected by `filter`, sorted.
    #[must_use]
    pub fn filter_codes(&self, filter: DiffFilter) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .nodes
            .iter()
            .filter(|n| filter.matches(n))
            .map(|n| n.code.as_str())
            .collect();
        codes.sort_unstable();
        codes
    }
}
