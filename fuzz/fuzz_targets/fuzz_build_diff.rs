#![no_main]
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;
use termdiff::{ColorRegistry, DiffGraphBuilder, NeighborhoodSession};

/// Fuzz diff construction on parsed but unvalidated input.
///
/// The input is split at the first NUL byte into a left and a right
/// document. Whatever parses is diffed, and a neighborhood is opened around
/// the first code of the result.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let (left, right) = s.split_once('\0').unwrap_or((s, s));
    let (Ok(left), Ok(right)) = (
        termdiff::parse_concept_graph_str(left),
        termdiff::parse_concept_graph_str(right),
    ) else {
        return;
    };
    let builder = DiffGraphBuilder::new().with_registry(Arc::new(ColorRegistry::new()));
    if let Ok(diff) = builder.build(&left, &right) {
        if let Some(focus) = diff.nodes().first().map(|n| n.code.clone()) {
            if let Ok(mut session) = NeighborhoodSession::open(Arc::new(diff), &focus) {
                session.change_layers(3);
                session.change_layers(-3);
            }
        }
    }
});
