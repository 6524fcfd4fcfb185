//! Benchmarks for diff graph construction.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use termdiff::{ColorRegistry, Concept, ConceptEdge, ConceptGraph, DiffGraphBuilder};

/// A balanced hierarchy of `count` concepts, each pointing at its parent.
fn hierarchy(count: usize, status: &str) -> ConceptGraph {
    let mut graph = ConceptGraph::new();
    for i in 0..count {
        graph.add_concept(
            Concept::new(format!("C{i}"))
                .with_display(format!("Concept {i}"))
                .with_property("status", status),
        );
        if i > 0 {
            graph.add_edge(ConceptEdge::new(
                format!("C{i}"),
                format!("C{}", (i - 1) / 4),
                "is-a",
            ));
        }
    }
    graph
}

fn bench_identical(c: &mut Criterion) {
    let graph = hierarchy(1_000, "active");
    let builder = DiffGraphBuilder::new().with_registry(Arc::new(ColorRegistry::new()));

    c.bench_function("diff_identical_1000_concepts", |b| {
        b.iter(|| {
            let _ = black_box(builder.build(black_box(&graph), black_box(&graph)));
        })
    });
}

fn bench_all_changed(c: &mut Criterion) {
    let left = hierarchy(1_000, "active");
    let right = hierarchy(1_000, "retired");
    let builder = DiffGraphBuilder::new().with_registry(Arc::new(ColorRegistry::new()));

    c.bench_function("diff_changed_1000_concepts", |b| {
        b.iter(|| {
            let _ = black_box(builder.build(black_box(&left), black_box(&right)));
        })
    });
}

criterion_group!(benches, bench_identical, bench_all_changed);
criterion_main!(benches);
