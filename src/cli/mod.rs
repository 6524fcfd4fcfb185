//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod diff;
mod neighborhood;
mod output;

pub use diff::{run_diff, DiffOptions};
pub use neighborhood::{run_neighborhood, NeighborhoodOptions};
pub use output::{render_legend, render_summary, TextLayout};

use crate::model::ConceptGraph;
use crate::parsers::{FileSource, TerminologySource};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Process exit codes
pub mod exit_codes {
    /// Success - no changes detected (or no --fail-on-change)
    pub const SUCCESS: i32 = 0;
    /// Changes were detected
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}

/// The two concept graph documents to compare.
#[derive(Debug, Clone, Default)]
pub struct GraphPaths {
    pub left: PathBuf,
    pub right: PathBuf,
}

/// Load both sides, in parallel for large documents.
pub(crate) fn load_pair(paths: &GraphPaths) -> Result<(ConceptGraph, ConceptGraph)> {
    let left = FileSource::new(&paths.left);
    let right = FileSource::new(&paths.right);
    let (left_graph, right_graph) = rayon::join(|| load(&left), || load(&right));
    Ok((left_graph?, right_graph?))
}

fn load(source: &FileSource) -> Result<ConceptGraph> {
    let graph = source
        .load()
        .with_context(|| format!("Failed to load {}", source.describe()))?;
    tracing::info!(
        "Loaded {} concepts and {} relations from {}",
        graph.len(),
        graph.edges.len(),
        source.describe()
    );
    Ok(graph)
}
