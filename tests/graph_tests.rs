//! Integration tests for diff graph construction.

use std::sync::Arc;
use termdiff::diff::{DiffFilter, DiffGraph};
use termdiff::error::MalformedInputKind;
use termdiff::{
    Classification, ColorBucket, ColorRegistry, Concept, ConceptEdge, ConceptGraph,
    DiffGraphBuilder, EdgeKey, GraphSide, TermDiffError,
};

/// Helper to build a concept graph from codes and (source, target, relationship) triples
fn make_graph(codes: &[&str], edges: &[(&str, &str, &str)]) -> ConceptGraph {
    let mut graph = ConceptGraph::new();
    for code in codes {
        graph.add_concept(Concept::new(*code));
    }
    for (source, target, relationship) in edges {
        graph.add_edge(ConceptEdge::new(*source, *target, *relationship));
    }
    graph
}

fn build_isolated(left: &ConceptGraph, right: &ConceptGraph) -> (DiffGraph, Arc<ColorRegistry>) {
    let registry = Arc::new(ColorRegistry::new());
    let diff = DiffGraphBuilder::new()
        .with_registry(Arc::clone(&registry))
        .build(left, right)
        .expect("valid input");
    (diff, registry)
}

#[test]
fn test_example_scenario() {
    let left = make_graph(&["A", "B"], &[("A", "B", "is-a")]);
    let right = make_graph(&["B", "C"], &[("B", "C", "is-a")]);
    let (diff, _) = build_isolated(&left, &right);

    let node = |code: &str| {
        let n = diff.node(code).expect("code present");
        (n.classification, n.side)
    };
    assert_eq!(node("A"), (Classification::Removed, GraphSide::Left));
    assert_eq!(node("B"), (Classification::Unchanged, GraphSide::Both));
    assert_eq!(node("C"), (Classification::Added, GraphSide::Right));

    let ab = diff.edge(&EdgeKey::new("A", "B", "is-a")).unwrap();
    assert_eq!((ab.classification, ab.side), (Classification::Removed, GraphSide::Left));
    let bc = diff.edge(&EdgeKey::new("B", "C", "is-a")).unwrap();
    assert_eq!((bc.classification, bc.side), (Classification::Added, GraphSide::Right));
}

#[test]
fn test_every_code_and_triple_exactly_once() {
    let left = make_graph(
        &["A", "B", "C"],
        &[("A", "B", "is-a"), ("A", "B", "part-of"), ("B", "C", "is-a")],
    );
    let right = make_graph(&["C", "B", "D"], &[("B", "C", "is-a"), ("D", "B", "is-a")]);
    let (diff, _) = build_isolated(&left, &right);

    assert_eq!(diff.node_count(), 4);
    assert_eq!(diff.edge_count(), 4);
    let mut keys: Vec<String> = diff.edges().iter().map(|e| e.key.to_string()).collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), 4);
}

#[test]
fn test_unknown_endpoint_in_both_inputs_is_rejected() {
    let left = make_graph(&["A"], &[]);
    let right = make_graph(&["A"], &[("A", "Z", "is-a")]);
    let registry = Arc::new(ColorRegistry::new());
    let err = DiffGraphBuilder::new()
        .with_registry(Arc::clone(&registry))
        .build(&left, &right)
        .unwrap_err();

    match err.malformed_kind() {
        Some(MalformedInputKind::UnknownEndpoint { side, code, .. }) => {
            assert_eq!(*side, GraphSide::Right);
            assert_eq!(code, "Z");
        }
        other => panic!("expected unknown endpoint, got {other:?}"),
    }
    // nothing was committed
    for bucket in ColorBucket::ALL {
        assert!(registry.is_empty(bucket));
    }
}

#[test]
fn test_duplicate_code_is_rejected() {
    let left = make_graph(&["A", "A"], &[]);
    let right = make_graph(&["A"], &[]);
    let err = DiffGraphBuilder::new()
        .with_registry(Arc::new(ColorRegistry::new()))
        .build(&left, &right)
        .unwrap_err();
    assert!(matches!(err, TermDiffError::MalformedInput { .. }));
    assert!(err.to_string().contains("comparing left and right"));
}

#[test]
fn test_edge_endpoint_may_live_on_other_side() {
    // B only exists on the right, the left edge still resolves in the diff graph
    let left = make_graph(&["A"], &[("A", "B", "is-a")]);
    let right = make_graph(&["A", "B"], &[]);
    let (diff, _) = build_isolated(&left, &right);
    let edge = diff.edge(&EdgeKey::new("A", "B", "is-a")).unwrap();
    assert_eq!(edge.classification, Classification::Removed);
}

#[test]
fn test_affected_and_filters() {
    let mut left = make_graph(&["A", "B", "C"], &[("B", "A", "is-a")]);
    left.concepts[2].properties.insert("status".into(), "active".into());
    let mut right = make_graph(&["A", "B", "C", "D"], &[("B", "A", "is-a"), ("D", "A", "is-a")]);
    right.concepts[2].properties.insert("status".into(), "retired".into());
    let (diff, _) = build_isolated(&left, &right);

    let affected: Vec<&str> = diff.affected_nodes().iter().map(|n| n.code.as_str()).collect();
    assert_eq!(affected, vec!["A", "C", "D"]);
    assert_eq!(diff.affected_edges().len(), 1);

    assert_eq!(diff.filter_codes(DiffFilter::All), vec!["A", "B", "C", "D"]);
    assert_eq!(diff.filter_codes(DiffFilter::Different), vec!["C", "D"]);
    assert_eq!(diff.filter_codes(DiffFilter::Identical), vec!["A", "B"]);
    assert_eq!(diff.filter_codes(DiffFilter::OnlyLeft), Vec::<&str>::new());
    assert_eq!(diff.filter_codes(DiffFilter::OnlyRight), vec!["D"]);
    assert_eq!(diff.filter_codes(DiffFilter::OnlyChanged), vec!["C"]);
}

#[test]
fn test_colors_shared_across_builds() {
    let registry = Arc::new(ColorRegistry::new());
    let builder = DiffGraphBuilder::new().with_registry(Arc::clone(&registry));

    let first = builder
        .build(&make_graph(&["A"], &[]), &make_graph(&["B"], &[]))
        .unwrap();
    let second = builder
        .build(&make_graph(&["X", "Y"], &[]), &make_graph(&["Y"], &[]))
        .unwrap();

    let removed_first = first.node("A").unwrap().color;
    let removed_second = second.node("X").unwrap().color;
    assert_eq!(removed_first, removed_second);
    assert_ne!(
        second.node("X").unwrap().color,
        second.node("Y").unwrap().color
    );
}

#[test]
fn test_json_output_shape() {
    let left = make_graph(&["A", "B"], &[("A", "B", "is-a")]);
    let right = make_graph(&["B"], &[]);
    let (diff, _) = build_isolated(&left, &right);

    let json = serde_json::to_value(&diff).unwrap();
    assert_eq!(json["nodes"][0]["code"], "A");
    assert_eq!(json["nodes"][0]["classification"], "removed");
    assert_eq!(json["nodes"][1]["side"], "both");
    assert_eq!(json["edges"][0]["source"], "A");
    assert_eq!(json["edges"][0]["relationship"], "is-a");
    assert!(json["edges"][0]["color"].as_str().unwrap().starts_with('#'));
}
