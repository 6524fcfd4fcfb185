//! The subgraph currently shown around a focus code.

use crate::diff::{DiffEdge, DiffNode};
use crate::model::EdgeKey;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// A diff node decorated with its distance from the focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinedVertex {
    #[serde(flatten)]
    pub node: DiffNode,
    /// Undirected BFS distance from the focus code (0 for the focus)
    pub depth: u32,
    /// True only for the focus code
    pub focus: bool,
}

impl CombinedVertex {
    #[must_use]
    pub fn code(&self) -> &str {
        &self.node.code
    }
}

/// A diff edge decorated with the layer it appears in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinedEdge {
    #[serde(flatten)]
    pub edge: DiffEdge,
    /// Larger endpoint depth; the edge is shown once the radius reaches it
    pub depth: u32,
}

impl CombinedEdge {
    #[must_use]
    pub fn key(&self) -> &EdgeKey {
        &self.edge.key
    }
}

/// Induced subgraph of all nodes within the current radius of the focus.
///
/// Vertices and edges are ordered by layer, closest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinedGraph {
    pub(crate) focus: String,
    pub(crate) radius: u32,
    #[serde(serialize_with = "values_only")]
    pub(crate) vertices: IndexMap<String, CombinedVertex>,
    #[serde(serialize_with = "values_only")]
    pub(crate) edges: IndexMap<EdgeKey, CombinedEdge>,
}

fn values_only<K, V, S>(map: &IndexMap<K, V>, serializer: S) -> Result<S::Ok, S::Error>
where
    V: Serialize,
    S: Serializer,
{
    serializer.collect_seq(map.values())
}

impl CombinedGraph {
    pub(crate) fn empty(focus: impl Into<String>) -> Self {
        Self {
            focus: focus.into(),
            radius: 0,
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn focus(&self) -> &str {
        &self.focus
    }

    #[must_use]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn vertices(&self) -> impl Iterator<Item = &CombinedVertex> {
        self.vertices.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &CombinedEdge> {
        self.edges.values()
    }

    #[must_use]
    pub fn vertex(&self, code: &str) -> Option<&CombinedVertex> {
        self.vertices.get(code)
    }

    #[must_use]
    pub fn edge(&self, key: &EdgeKey) -> Option<&CombinedEdge> {
        self.edges.get(key)
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.vertices.contains_key(code)
    }

    #[must_use]
    pub fn focus_vertex(&self) -> Option<&CombinedVertex> {
        self.vertices.get(&self.focus)
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Codes of all vertices, closest layer first
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.vertices.keys().map(String::as_str)
    }
}
