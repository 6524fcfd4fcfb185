//! Performance benchmarks for large concept graphs.
//!
//! Run with: cargo bench --bench large_graph

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use termdiff::{
    ColorRegistry, Concept, ConceptEdge, ConceptGraph, DiffGraph, DiffGraphBuilder,
    NeighborhoodSession,
};

/// Generate a hierarchy with the given number of concepts and fan-out 8.
fn generate_graph(count: usize) -> ConceptGraph {
    let mut graph = ConceptGraph::new();
    for i in 0..count {
        graph.add_concept(Concept::new(format!("C{i}")).with_property("status", "active"));
        if i > 0 {
            graph.add_edge(ConceptEdge::new(
                format!("C{i}"),
                format!("C{}", (i - 1) / 8),
                "is-a",
            ));
        }
    }
    graph
}

/// Generate two related graphs: the right one drops the last `change_percent`
/// of concepts and adds as many new ones.
fn generate_graph_pair(size: usize, change_percent: f64) -> (ConceptGraph, ConceptGraph) {
    let left = generate_graph(size);
    let changes = (size as f64 * change_percent / 100.0) as usize;

    let mut right = generate_graph(size - changes);
    for i in 0..changes {
        let code = format!("N{i}");
        right.add_concept(Concept::new(code.as_str()));
        right.add_edge(ConceptEdge::new(code, "C0", "is-a"));
    }
    (left, right)
}

fn build(left: &ConceptGraph, right: &ConceptGraph) -> DiffGraph {
    DiffGraphBuilder::new()
        .with_registry(Arc::new(ColorRegistry::new()))
        .build(left, right)
        .unwrap()
}

fn bench_diff_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_scaling");

    for size in [1_000, 10_000, 50_000].iter() {
        let (left, right) = generate_graph_pair(*size, 10.0);
        let builder = DiffGraphBuilder::new().with_registry(Arc::new(ColorRegistry::new()));

        group.bench_with_input(BenchmarkId::new("build", size), size, |b, _| {
            b.iter(|| {
                let _ = black_box(builder.build(black_box(&left), black_box(&right)));
            })
        });
    }

    group.finish();
}

fn bench_session_open(c: &mut Criterion) {
    let (left, right) = generate_graph_pair(50_000, 10.0);
    let diff = Arc::new(build(&left, &right));

    c.bench_function("neighborhood_open_50000", |b| {
        b.iter(|| {
            let _ = black_box(NeighborhoodSession::open(Arc::clone(&diff), "C17"));
        })
    });
}

fn bench_layer_changes(c: &mut Criterion) {
    let (left, right) = generate_graph_pair(50_000, 10.0);
    let diff = Arc::new(build(&left, &right));
    let mut session = NeighborhoodSession::open(diff, "C17").unwrap();

    c.bench_function("neighborhood_increase_decrease", |b| {
        b.iter(|| {
            session.change_layers(2);
            black_box(session.current_graph());
            session.change_layers(-2);
        })
    });
}

criterion_group!(
    benches,
    bench_diff_scaling,
    bench_session_open,
    bench_layer_changes,
);

criterion_main!(benches);
