//! Label and tooltip text for diff elements.

use crate::diff::{DiffEdge, DiffNode, GraphSide};

/// Vertex label: the code itself.
#[must_use]
pub fn vertex_label(node: &DiffNode) -> &str {
    &node.code
}

/// Display text as seen across the present sides.
///
/// Both-sided nodes whose display text differs read `"<left> vs. <right>"`.
#[must_use]
pub fn side_display(node: &DiffNode) -> Option<String> {
    match node.side {
        GraphSide::Left => node.display_left.clone(),
        GraphSide::Right => node.display_right.clone(),
        GraphSide::Both => match (&node.display_left, &node.display_right) {
            (Some(left), Some(right)) if left != right => Some(format!("{left} vs. {right}")),
            (left, right) => right.clone().or_else(|| left.clone()),
        },
    }
}

/// Vertex tooltip: per-side display text followed by the classification.
///
/// Falls back to the code when neither side carries display text.
#[must_use]
pub fn vertex_tooltip(node: &DiffNode) -> String {
    let display = side_display(node).unwrap_or_else(|| node.code.clone());
    format!("{display} ({}, {})", node.classification, node.side)
}

/// Edge label: the relationship code.
#[must_use]
pub fn edge_label(edge: &DiffEdge) -> &str {
    edge.relationship()
}

/// Edge tooltip: `'source' -> 'target' [relationship]`.
#[must_use]
pub fn edge_tooltip(edge: &DiffEdge) -> String {
    edge.key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorRegistry;
    use crate::diff::DiffGraphBuilder;
    use crate::model::{Concept, ConceptEdge, ConceptGraph};
    use std::sync::Arc;

    fn diff() -> crate::diff::DiffGraph {
        let mut left = ConceptGraph::new();
        left.add_concept(Concept::new("A").with_display("Liver disorder"))
            .add_concept(Concept::new("B").with_display("Hepatitis"))
            .add_concept(Concept::new("C"));
        left.add_edge(ConceptEdge::new("B", "A", "parent"));

        let mut right = ConceptGraph::new();
        right
            .add_concept(Concept::new("A").with_display("Hepatic disorder"))
            .add_concept(Concept::new("B").with_display("Hepatitis"))
            .add_concept(Concept::new("D").with_display("Cirrhosis"));
        right.add_edge(ConceptEdge::new("B", "A", "parent"));

        DiffGraphBuilder::new()
            .with_registry(Arc::new(ColorRegistry::new()))
            .build(&left, &right)
            .expect("valid input")
    }

    #[test]
    fn test_vertex_tooltips() {
        let diff = diff();
        let tooltip = |code: &str| vertex_tooltip(diff.node(code).expect("node exists"));

        insta::assert_snapshot!(tooltip("A"), @"Liver disorder vs. Hepatic disorder (unchanged, both)");
        insta::assert_snapshot!(tooltip("B"), @"Hepatitis (unchanged, both)");
        insta::assert_snapshot!(tooltip("C"), @"C (removed, left)");
        insta::assert_snapshot!(tooltip("D"), @"Cirrhosis (added, right)");
    }

    #[test]
    fn test_edge_text() {
        let diff = diff();
        let edge = &diff.edges()[0];
        assert_eq!(edge_label(edge), "parent");
        insta::assert_snapshot!(edge_tooltip(edge), @"'B' -> 'A' [parent]");
    }

    #[test]
    fn test_vertex_label_is_code() {
        let diff = diff();
        assert_eq!(vertex_label(&diff.nodes()[1]), "B");
    }
}
