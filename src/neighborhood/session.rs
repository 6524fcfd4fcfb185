//! Incremental neighborhood expansion around a focus code.

use super::combined::{CombinedEdge, CombinedGraph, CombinedVertex};
use crate::config::NeighborhoodConfig;
use crate::diff::DiffGraph;
use crate::error::{Result, TermDiffError};
use std::collections::VecDeque;
use std::sync::Arc;

/// A bounded-radius view around one focus code of one diff graph.
///
/// Distances are computed once, by a single breadth-first traversal at
/// [`open`](Self::open), treating edges as undirected. Nodes and edges are
/// bucketed by layer, so growing or shrinking the radius only touches the
/// frontier layer.
///
/// The session is single-writer. [`current_graph`](Self::current_graph)
/// hands out an immutable snapshot that stays valid while the session
/// changes layers. A layer change while such a snapshot is still held
/// copies the shown subgraph once before editing it, so that step costs
/// O(shown graph) rather than O(frontier layer).
///
/// A radius past the deepest reachable layer is kept as requested, but
/// costs nothing beyond the reachable layers.
#[derive(Debug)]
pub struct NeighborhoodSession {
    graph: Arc<DiffGraph>,
    focus: usize,
    radius: u32,
    /// node index -> distance from the focus, `None` if unreachable
    distances: Vec<Option<u32>>,
    /// depth -> node indices at that depth
    node_layers: Vec<Vec<usize>>,
    /// depth -> edge indices whose farther endpoint is at that depth
    edge_layers: Vec<Vec<usize>>,
    current: Arc<CombinedGraph>,
}

impl NeighborhoodSession {
    /// Open a session around `focus` with radius 1.
    ///
    /// Fails if `focus` is not a vertex of `graph`.
    pub fn open(graph: Arc<DiffGraph>, focus: &str) -> Result<Self> {
        Self::open_with_radius(graph, focus, 1)
    }

    /// Open a session using the configured initial radius.
    pub fn open_with_config(
        graph: Arc<DiffGraph>,
        focus: &str,
        config: &NeighborhoodConfig,
    ) -> Result<Self> {
        Self::open_with_radius(graph, focus, config.initial_layers)
    }

    /// Open a session with the given initial radius (raised to 1 if lower).
    pub fn open_with_radius(graph: Arc<DiffGraph>, focus: &str, radius: u32) -> Result<Self> {
        let focus_index = graph
            .index_of(focus)
            .ok_or_else(|| TermDiffError::unknown_focus(focus))?;

        let distances = bfs_distances(&graph, focus_index);
        let node_layers = bucket_nodes(&distances);
        let edge_layers = bucket_edges(&graph, &distances);

        let mut session = Self {
            current: Arc::new(CombinedGraph::empty(focus)),
            graph,
            focus: focus_index,
            radius: 0,
            distances,
            node_layers,
            edge_layers,
        };
        // layer 0 is the focus itself
        session.push_layer(0);
        session.set_radius(radius);

        tracing::info!(
            "Built neighborhood for focus concept '{}' with radius={}: {} vertices and {} edges",
            focus,
            session.radius,
            session.current.vertex_count(),
            session.current.edge_count()
        );
        Ok(session)
    }

    /// Current radius (layer count), at least 1.
    #[must_use]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Snapshot of the subgraph within the current radius.
    #[must_use]
    pub fn current_graph(&self) -> Arc<CombinedGraph> {
        Arc::clone(&self.current)
    }

    /// Grow the radius by one layer. Returns the new radius.
    pub fn increase_layer(&mut self) -> u32 {
        let (nodes, edges) = self.set_radius(self.radius.saturating_add(1));
        tracing::debug!(
            "increased neighborhood of '{}' to {} layers (+{} vertices, +{} edges)",
            self.focus_code(),
            self.radius,
            nodes,
            edges
        );
        self.radius
    }

    /// Shrink the radius by one layer, never below 1. Returns the new radius.
    pub fn decrease_layer(&mut self) -> u32 {
        if self.radius <= 1 {
            return self.radius;
        }
        let (nodes, edges) = self.set_radius(self.radius - 1);
        tracing::debug!(
            "decreased neighborhood of '{}' to {} layers (-{} vertices, -{} edges)",
            self.focus_code(),
            self.radius,
            nodes,
            edges
        );
        self.radius
    }

    /// Move the radius by `delta` layers, clamped at 1. Returns the new radius.
    pub fn change_layers(&mut self, delta: i32) -> u32 {
        let target = if delta >= 0 {
            self.radius.saturating_add(delta.unsigned_abs())
        } else {
            self.radius.saturating_sub(delta.unsigned_abs())
        };
        let before = self.radius;
        let (nodes, edges) = self.set_radius(target);
        if before != self.radius {
            tracing::debug!(
                "moved neighborhood of '{}' from {} to {} layers ({} vertices, {} edges touched)",
                self.focus_code(),
                before,
                self.radius,
                nodes,
                edges
            );
        }
        self.radius
    }

    #[must_use]
    pub fn focus_code(&self) -> &str {
        &self.graph.nodes()[self.focus].code
    }

    #[must_use]
    pub fn diff_graph(&self) -> &Arc<DiffGraph> {
        &self.graph
    }

    /// Distance of `code` from the focus, `None` if unknown or unreachable.
    #[must_use]
    pub fn depth_of(&self, code: &str) -> Option<u32> {
        self.graph.index_of(code).and_then(|i| self.distances[i])
    }

    /// Largest distance of any node reachable from the focus.
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        u32::try_from(self.node_layers.len().saturating_sub(1)).unwrap_or(u32::MAX)
    }

    /// Whether every node reachable from the focus is shown.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.radius >= self.max_depth()
    }

    /// Number of nodes reachable from the focus, including the focus.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.node_layers.iter().map(Vec::len).sum()
    }

    /// Move to radius `target` (at least 1), touching only layers that
    /// hold reachable nodes. Returns the vertices and edges added or removed.
    fn set_radius(&mut self, target: u32) -> (usize, usize) {
        let target = target.max(1);
        if target == self.radius {
            return (0, 0);
        }
        let max_depth = self.max_depth();
        let mut touched = (0, 0);
        if target > self.radius {
            for depth in self.radius + 1..=target.min(max_depth) {
                let (nodes, edges) = self.push_layer(depth);
                touched.0 += nodes;
                touched.1 += edges;
            }
        } else {
            // newest layer first, so truncation removes the right entries
            for depth in (target + 1..=self.radius.min(max_depth)).rev() {
                let (nodes, edges) = self.pop_layer(depth);
                touched.0 += nodes;
                touched.1 += edges;
            }
        }
        self.radius = target;
        Arc::make_mut(&mut self.current).radius = target;
        touched
    }

    /// Add the nodes and edges of layer `depth` to the snapshot.
    fn push_layer(&mut self, layer_depth: u32) -> (usize, usize) {
        let depth = layer_depth as usize;
        let graph = &self.graph;
        let distances = &self.distances;
        let focus = self.focus;
        let current = Arc::make_mut(&mut self.current);

        let mut added = (0, 0);
        if let Some(layer) = self.node_layers.get(depth) {
            for &i in layer {
                let node = graph.nodes()[i].clone();
                current.vertices.insert(
                    node.code.clone(),
                    CombinedVertex {
                        node,
                        depth: distances[i].unwrap_or_default(),
                        focus: i == focus,
                    },
                );
            }
            added.0 = layer.len();
        }
        if let Some(layer) = self.edge_layers.get(depth) {
            for &e in layer {
                let edge = graph.edges()[e].clone();
                current.edges.insert(
                    edge.key.clone(),
                    CombinedEdge {
                        edge,
                        depth: layer_depth,
                    },
                );
            }
            added.1 = layer.len();
        }
        added
    }

    /// Remove the nodes and edges of layer `depth`, which are the most
    /// recently pushed entries of the snapshot.
    fn pop_layer(&mut self, depth: u32) -> (usize, usize) {
        let depth = depth as usize;
        let current = Arc::make_mut(&mut self.current);
        let nodes = self.node_layers.get(depth).map_or(0, Vec::len);
        let edges = self.edge_layers.get(depth).map_or(0, Vec::len);
        current.vertices.truncate(current.vertices.len() - nodes);
        current.edges.truncate(current.edges.len() - edges);
        (nodes, edges)
    }
}

/// Undirected shortest-path distances from `focus`.
fn bfs_distances(graph: &DiffGraph, focus: usize) -> Vec<Option<u32>> {
    let mut distances = vec![None; graph.node_count()];
    let mut queue = VecDeque::new();
    distances[focus] = Some(0);
    queue.push_back(focus);

    while let Some(node) = queue.pop_front() {
        let next_depth = distances[node].map_or(0, |d| d + 1);
        for &edge in graph.incident(node) {
            let neighbor = graph.opposite(edge, node);
            if distances[neighbor].is_none() {
                distances[neighbor] = Some(next_depth);
                queue.push_back(neighbor);
            }
        }
    }
    distances
}

fn bucket_nodes(distances: &[Option<u32>]) -> Vec<Vec<usize>> {
    let mut layers: Vec<Vec<usize>> = Vec::new();
    for (i, distance) in distances.iter().enumerate() {
        if let Some(d) = distance {
            let d = *d as usize;
            if layers.len() <= d {
                layers.resize_with(d + 1, Vec::new);
            }
            layers[d].push(i);
        }
    }
    layers
}

fn bucket_edges(graph: &DiffGraph, distances: &[Option<u32>]) -> Vec<Vec<usize>> {
    let mut layers: Vec<Vec<usize>> = Vec::new();
    for edge in 0..graph.edge_count() {
        let (source, target) = graph.endpoints(edge);
        // both endpoints are reachable or neither is
        if let (Some(s), Some(t)) = (distances[source], distances[target]) {
            let d = s.max(t) as usize;
            if layers.len() <= d {
                layers.resize_with(d + 1, Vec::new);
            }
            layers[d].push(edge);
        }
    }
    layers
}
