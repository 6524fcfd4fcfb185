//! Plain-text rendering for terminal output.

use crate::color::{Color, ColorBucket, ColorRegistry};
use crate::diff::{Classification, DiffGraph};
use crate::neighborhood::CombinedGraph;
use crate::render::{self, LayoutOutput, StyleProvider};
use std::fmt::Write as _;

/// Paint `text` with a 24-bit foreground color if colored output is enabled.
fn paint(text: &str, color: Color, colored: bool) -> String {
    if colored {
        format!(
            "\x1b[38;2;{};{};{}m{text}\x1b[0m",
            color.r, color.g, color.b
        )
    } else {
        text.to_string()
    }
}

fn bold(text: &str, colored: bool) -> String {
    if colored {
        format!("\x1b[1m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

/// Classification counts, affected codes and the classification legend.
pub fn render_summary(diff: &DiffGraph, registry: &ColorRegistry, colored: bool) -> String {
    let mut out = String::new();
    let left = diff.left_name().unwrap_or("left");
    let right = diff.right_name().unwrap_or("right");
    let _ = writeln!(out, "{}", bold("Terminology Diff Summary", colored));
    let _ = writeln!(out, "{}", "-".repeat(40));
    let _ = writeln!(out, "Versions:  {left} -> {right}");

    let summary = diff.summary();
    for (title, counts) in [("Concepts", summary.nodes), ("Relations", summary.edges)] {
        let _ = writeln!(
            out,
            "{title}: {} total, +{} added, -{} removed, ~{} changed, {} unchanged",
            counts.total(),
            counts.added,
            counts.removed,
            counts.changed,
            counts.unchanged
        );
    }

    let affected = diff.affected_nodes();
    if !affected.is_empty() {
        let _ = writeln!(out, "\n{}", bold("Affected concepts", colored));
        for node in affected {
            let marker = match node.classification {
                Classification::Added => "+",
                Classification::Removed => "-",
                Classification::Changed => "~",
                Classification::Unchanged => " ",
            };
            let _ = writeln!(
                out,
                "  {} {}  {}",
                paint(marker, node.color, colored),
                node.code,
                render::vertex_tooltip(node)
            );
            for change in &node.property_changes {
                let _ = writeln!(
                    out,
                    "      {}: {} -> {}",
                    change.property,
                    change.left.as_deref().unwrap_or("(none)"),
                    change.right.as_deref().unwrap_or("(none)")
                );
            }
        }
    }

    let _ = writeln!(out);
    out.push_str(&render_legend(registry, ColorBucket::Classification, colored));
    out
}

/// One line per legend entry: a colored swatch, the hex value and the key.
pub fn render_legend(registry: &ColorRegistry, bucket: ColorBucket, colored: bool) -> String {
    let mut out = format!("Legend ({bucket}):\n");
    for entry in render::legend(registry, bucket) {
        let _ = writeln!(
            out,
            "  {} {}  {}",
            paint("##", entry.color, colored),
            entry.color,
            entry.key
        );
    }
    out
}

/// Text renderer: vertices grouped by depth, then edges.
#[derive(Debug, Default)]
pub struct TextLayout {
    colored: bool,
    buffer: String,
}

impl TextLayout {
    pub fn new(colored: bool) -> Self {
        Self {
            colored,
            buffer: String::new(),
        }
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl LayoutOutput for TextLayout {
    fn layout(&mut self, graph: &CombinedGraph, styles: &dyn StyleProvider) {
        let _ = writeln!(
            self.buffer,
            "{}",
            bold(
                &format!(
                    "Neighborhood of '{}' ({} layers, {} concepts, {} relations)",
                    graph.focus(),
                    graph.radius(),
                    graph.vertex_count(),
                    graph.edge_count()
                ),
                self.colored
            )
        );
        for vertex in graph.vertices() {
            let style = styles.vertex_style(vertex);
            let indent = "  ".repeat(vertex.depth as usize + 1);
            let label = if style.emphasized {
                bold(&style.label, self.colored)
            } else {
                style.label
            };
            let _ = writeln!(
                self.buffer,
                "{indent}{} {label}  {}",
                paint("●", style.fill, self.colored),
                style.tooltip
            );
        }
        if graph.edge_count() > 0 {
            let _ = writeln!(self.buffer, "Relations:");
        }
        for edge in graph.edges() {
            let style = styles.edge_style(edge);
            let _ = writeln!(
                self.buffer,
                "  {} {}  ({})",
                paint("→", style.stroke, self.colored),
                style.tooltip,
                edge.edge.classification
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffGraphBuilder;
    use crate::model::{Concept, ConceptEdge, ConceptGraph};
    use crate::neighborhood::NeighborhoodSession;
    use crate::render::DiffStyle;
    use std::sync::Arc;

    fn build(registry: &Arc<ColorRegistry>) -> DiffGraph {
        let mut left = ConceptGraph::named("v1");
        left.add_concept(Concept::new("A")).add_concept(Concept::new("B"));
        left.add_edge(ConceptEdge::new("A", "B", "is-a"));
        let mut right = ConceptGraph::named("v2");
        right.add_concept(Concept::new("B")).add_concept(Concept::new("C"));
        right.add_edge(ConceptEdge::new("B", "C", "is-a"));
        DiffGraphBuilder::new()
            .with_registry(Arc::clone(registry))
            .build(&left, &right)
            .unwrap()
    }

    #[test]
    fn test_summary_without_color() {
        let registry = Arc::new(ColorRegistry::new());
        let text = render_summary(&build(&registry), &registry, false);

        assert!(text.contains("Versions:  v1 -> v2"));
        assert!(text.contains("Concepts: 3 total, +1 added, -1 removed, ~0 changed, 1 unchanged"));
        assert!(text.contains("  - A  A (removed, left)"));
        assert!(text.contains("  + C  C (added, right)"));
        assert!(!text.contains('\x1b'));
        assert!(text.contains("Legend (classification):"));
    }

    #[test]
    fn test_text_layout() {
        let registry = Arc::new(ColorRegistry::new());
        let session = NeighborhoodSession::open(Arc::new(build(&registry)), "B").unwrap();
        let mut layout = TextLayout::new(false);
        layout.layout(&session.current_graph(), &DiffStyle);
        let text = layout.into_string();

        assert!(text.starts_with("Neighborhood of 'B' (1 layers, 3 concepts, 2 relations)"));
        assert!(text.contains("  → 'A' -> 'B' [is-a]  (removed)"));
        assert!(text.contains("    ● C  C (added, right)"));
    }
}
