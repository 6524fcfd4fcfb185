//! **Semantic diff graphs for coded terminologies.**
//!
//! `termdiff` compares two versions ("left" and "right") of a coded
//! terminology resource, a set of codes with display text, properties and
//! typed relations, and produces a classified difference graph. Around any
//! code of that graph it maintains a bounded-radius neighborhood that can
//! grow and shrink one layer at a time.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The input, a [`ConceptGraph`] per side.
//! - **[`diff`]**: The [`DiffGraphBuilder`] matches vertices by code and edges
//!   by (source, target, relationship) and classifies each as added, removed,
//!   unchanged or changed.
//! - **[`neighborhood`]**: A [`NeighborhoodSession`] explores the diff graph
//!   around a focus code and hands out immutable [`CombinedGraph`] snapshots.
//! - **[`color`]**: The append-only [`ColorRegistry`] that keeps colors stable
//!   across every view rendered in one process.
//! - **[`render`]**: Labels, tooltips and per-element styles for an external
//!   layout/rendering module.
//! - **[`parsers`]**: Reading concept graphs from JSON or YAML.
//!
//! ## Diffing Two Versions
//!
//! ```no_run
//! use std::path::Path;
//! use termdiff::{parse_concept_graph, DiffGraphBuilder};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let left = parse_concept_graph(Path::new("v1.yaml"))?;
//!     let right = parse_concept_graph(Path::new("v2.yaml"))?;
//!
//!     let diff = DiffGraphBuilder::new().build(&left, &right)?;
//!     let summary = diff.summary();
//!     println!("Concepts added: {}", summary.nodes.added);
//!     println!("Concepts removed: {}", summary.nodes.removed);
//!
//!     for node in diff.affected_nodes() {
//!         println!("  {} {}", node.classification, node.code);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Exploring a Neighborhood
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use termdiff::{parse_concept_graph, DiffGraphBuilder, NeighborhoodSession};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let left = parse_concept_graph(Path::new("v1.yaml"))?;
//!     let right = parse_concept_graph(Path::new("v2.yaml"))?;
//!     let diff = Arc::new(DiffGraphBuilder::new().build(&left, &right)?);
//!
//!     let mut session = NeighborhoodSession::open(diff, "C0023884")?;
//!     session.increase_layer();
//!     let view = session.current_graph();
//!     for vertex in view.vertices() {
//!         println!("{:>2} {}", vertex.depth, vertex.code());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `termdiff` binary wraps the library: `termdiff diff`, `termdiff
//! neighborhood`, `termdiff schema` and `termdiff completions`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // depth and count casts are bounded by graph size
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    // Variable names like `left`/`right` pairs are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod color;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod neighborhood;
pub mod parsers;
pub mod render;

// Re-export main types for convenience
pub use color::{Color, ColorBucket, ColorRegistry, LegendEntry};
pub use config::{
    AppConfig, AppConfigBuilder, ConfigOverrides, DiffConfig, NeighborhoodConfig, OutputConfig,
};
pub use config::{ConfigError, Validatable};
pub use diff::{Classification, DiffEdge, DiffFilter, DiffGraph, DiffGraphBuilder, DiffNode, GraphSide};
pub use error::{ErrorContext, Result, TermDiffError};
pub use model::{Concept, ConceptEdge, ConceptGraph, EdgeKey};
pub use neighborhood::{CombinedEdge, CombinedGraph, CombinedVertex, NeighborhoodSession};
pub use parsers::{parse_concept_graph, parse_concept_graph_str};
pub use render::{DiffStyle, ElementStyle, LayoutOutput, StyleProvider};
