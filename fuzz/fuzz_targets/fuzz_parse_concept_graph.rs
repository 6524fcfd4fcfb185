#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the concept graph reader.
///
/// Feeds arbitrary UTF-8 strings to `parse_concept_graph_str`, covering both
/// the JSON and the YAML path.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = termdiff::parse_concept_graph_str(s);
    }
});
