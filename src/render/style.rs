//! Per-element style attributes handed to a layout/rendering module.

use super::labels::{edge_label, edge_tooltip, vertex_label, vertex_tooltip};
use crate::color::Color;
use crate::neighborhood::{CombinedEdge, CombinedGraph, CombinedVertex};
use serde::Serialize;

/// Everything a renderer needs to draw one vertex or edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementStyle {
    pub label: String,
    pub tooltip: String,
    pub fill: Color,
    pub stroke: Color,
    /// Drawn highlighted (the focus vertex)
    pub emphasized: bool,
}

/// Source of per-element styles.
///
/// Implement this to restyle a view without touching the graph.
pub trait StyleProvider {
    fn vertex_style(&self, vertex: &CombinedVertex) -> ElementStyle;

    fn edge_style(&self, edge: &CombinedEdge) -> ElementStyle;
}

/// Default styling: fill by classification, stroke by side.
///
/// Edges are stroked by relationship color instead, so relationship kinds
/// stay distinguishable in a legend.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffStyle;

impl StyleProvider for DiffStyle {
    fn vertex_style(&self, vertex: &CombinedVertex) -> ElementStyle {
        ElementStyle {
            label: vertex_label(&vertex.node).to_string(),
            tooltip: vertex_tooltip(&vertex.node),
            fill: vertex.node.color,
            stroke: vertex.node.side_color,
            emphasized: vertex.focus,
        }
    }

    fn edge_style(&self, edge: &CombinedEdge) -> ElementStyle {
        ElementStyle {
            label: edge_label(&edge.edge).to_string(),
            tooltip: edge_tooltip(&edge.edge),
            fill: edge.edge.color,
            stroke: edge.edge.relationship_color,
            emphasized: false,
        }
    }
}

/// Capability of an external layout/rendering module.
///
/// The module receives the typed subgraph together with the style functions
/// and owns everything after that: placement, drawing and input handling.
pub trait LayoutOutput {
    fn layout(&mut self, graph: &CombinedGraph, styles: &dyn StyleProvider);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorBucket, ColorRegistry};
    use crate::diff::DiffGraphBuilder;
    use crate::model::{Concept, ConceptEdge, ConceptGraph};
    use crate::neighborhood::NeighborhoodSession;
    use std::sync::Arc;

    /// Records what a renderer would be asked to draw.
    #[derive(Default)]
    struct RecordingLayout {
        vertices: Vec<(String, ElementStyle)>,
        edges: Vec<ElementStyle>,
    }

    impl LayoutOutput for RecordingLayout {
        fn layout(&mut self, graph: &CombinedGraph, styles: &dyn StyleProvider) {
            self.vertices = graph
                .vertices()
                .map(|v| (v.code().to_string(), styles.vertex_style(v)))
                .collect();
            self.edges = graph.edges().map(|e| styles.edge_style(e)).collect();
        }
    }

    fn session(registry: &Arc<ColorRegistry>) -> NeighborhoodSession {
        let mut left = ConceptGraph::new();
        left.add_concept(Concept::new("A")).add_concept(Concept::new("B"));
        left.add_edge(ConceptEdge::new("A", "B", "is-a"));
        let mut right = ConceptGraph::new();
        right.add_concept(Concept::new("B")).add_concept(Concept::new("C"));
        right.add_edge(ConceptEdge::new("B", "C", "is-a"));

        let diff = DiffGraphBuilder::new()
            .with_registry(Arc::clone(registry))
            .build(&left, &right)
            .expect("valid input");
        NeighborhoodSession::open(Arc::new(diff), "B").expect("B exists")
    }

    #[test]
    fn test_layout_receives_styles() {
        let registry = Arc::new(ColorRegistry::new());
        let session = session(&registry);
        let mut layout = RecordingLayout::default();
        layout.layout(&session.current_graph(), &DiffStyle);

        assert_eq!(layout.vertices.len(), 3);
        assert_eq!(layout.edges.len(), 2);

        let emphasized: Vec<_> = layout
            .vertices
            .iter()
            .filter(|(_, style)| style.emphasized)
            .map(|(code, _)| code.as_str())
            .collect();
        assert_eq!(emphasized, vec!["B"]);
    }

    #[test]
    fn test_colors_come_from_registry() {
        let registry = Arc::new(ColorRegistry::new());
        let session = session(&registry);
        let graph = session.current_graph();

        let a = DiffStyle.vertex_style(graph.vertex("A").expect("A within radius"));
        assert_eq!(
            Some(a.fill),
            registry.lookup(ColorBucket::Classification, "removed")
        );
        assert_eq!(Some(a.stroke), registry.lookup(ColorBucket::Side, "left"));

        let edge = graph.edges().next().expect("an edge within radius");
        let style = DiffStyle.edge_style(edge);
        assert_eq!(
            Some(style.stroke),
            registry.lookup(ColorBucket::Relationship, "is-a")
        );
        assert_eq!(style.label, "is-a");
        assert!(!style.emphasized);
    }

    #[test]
    fn test_fill_and_stroke_carry_separate_information() {
        let registry = Arc::new(ColorRegistry::new());
        let session = session(&registry);
        let graph = session.current_graph();

        for code in ["A", "B", "C"] {
            let style = DiffStyle.vertex_style(graph.vertex(code).expect("within radius"));
            assert_ne!(style.fill, style.stroke, "{code} fill equals stroke");
        }
        let edge = graph.edges().next().expect("an edge within radius");
        let style = DiffStyle.edge_style(edge);
        assert_ne!(style.fill, style.stroke);
    }
}
