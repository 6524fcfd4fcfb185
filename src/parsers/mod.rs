//! Concept graph readers.
//!
//! A concept graph is delivered as a JSON or YAML document:
//!
//! ```yaml
//! name: v2
//! concepts:
//!   - code: A
//!     display: Liver disorder
//!     properties: { status: active }
//! edges:
//!   - { source: B, target: A, relationship: parent }
//! ```
//!
//! Parsing only checks the document shape. Graph invariants (unique codes,
//! known edge endpoints) are checked by the diff builder.

use crate::error::{ErrorContext, ParseErrorKind, Result, TermDiffError};
use crate::model::ConceptGraph;
use std::path::{Path, PathBuf};

/// Maximum concept graph file size (256 MB).
const MAX_GRAPH_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Supplier of one side's concept graph.
pub trait TerminologySource {
    /// Short description used in log output and error context
    fn describe(&self) -> String;

    fn load(&self) -> Result<ConceptGraph>;
}

/// A concept graph document on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TerminologySource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    /// Load the document, naming the graph after the file stem if the
    /// document carries no name.
    fn load(&self) -> Result<ConceptGraph> {
        let mut graph = parse_concept_graph(&self.path)?;
        if graph.name.is_none() {
            graph.name = self
                .path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned());
        }
        Ok(graph)
    }
}

/// Read and parse a concept graph file.
pub fn parse_concept_graph(path: &Path) -> Result<ConceptGraph> {
    let metadata = std::fs::metadata(path).map_err(|e| TermDiffError::io(path, e))?;
    if metadata.len() > MAX_GRAPH_FILE_SIZE {
        return Err(TermDiffError::validation(format!(
            "{} is {} MB, exceeding the {} MB limit",
            path.display(),
            metadata.len() / (1024 * 1024),
            MAX_GRAPH_FILE_SIZE / (1024 * 1024),
        )));
    }
    let content = std::fs::read_to_string(path).map_err(|e| TermDiffError::io(path, e))?;
    let graph = parse_concept_graph_str(&content)
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(
        "Parsed {} concepts and {} edges from {}",
        graph.concepts.len(),
        graph.edges.len(),
        path.display()
    );
    Ok(graph)
}

/// Parse a concept graph from a JSON (leading `{`) or YAML document.
pub fn parse_concept_graph_str(content: &str) -> Result<ConceptGraph> {
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Err(TermDiffError::parse("concept graph", ParseErrorKind::Empty));
    }
    if trimmed.starts_with('{') {
        serde_json::from_str(trimmed).map_err(|e| {
            TermDiffError::parse("concept graph", ParseErrorKind::InvalidJson(e.to_string()))
        })
    } else {
        serde_yaml::from_str(trimmed).map_err(|e| {
            TermDiffError::parse("concept graph", ParseErrorKind::InvalidYaml(e.to_string()))
        })
    }
}
