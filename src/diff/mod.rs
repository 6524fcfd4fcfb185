//! Semantic diff of two concept graphs.
//!
//! The [`DiffGraphBuilder`] matches vertices by code and edges by their
//! (source, target, relationship) triple and classifies every element:
//!
//! | present in | compared values | classification | side  |
//! |------------|-----------------|----------------|-------|
//! | left only  | -               | `Removed`      | `Left`  |
//! | right only | -               | `Added`        | `Right` |
//! | both       | equal           | `Unchanged`    | `Both`  |
//! | both       | differ          | `Changed`      | `Both`  |
//!
//! Property comparison runs over the union of property keys; a property
//! present on one side only is a difference. Edge classification never
//! inherits from endpoint classification.
//!
//! # Example
//!
//! ```
//! use termdiff::diff::{Classification, DiffGraphBuilder};
//! use termdiff::model::{Concept, ConceptEdge, ConceptGraph};
//!
//! let mut left = ConceptGraph::new();
//! left.add_concept(Concept::new("A")).add_concept(Concept::new("B"));
//! left.add_edge(ConceptEdge::new("A", "B", "is-a"));
//!
//! let mut right = ConceptGraph::new();
//! right.add_concept(Concept::new("B")).add_concept(Concept::new("C"));
//! right.add_edge(ConceptEdge::new("B", "C", "is-a"));
//!
//! let diff = DiffGraphBuilder::new().build(&left, &right)?;
//! assert_eq!(diff.node("A").map(|n| n.classification), Some(Classification::Removed));
//! assert_eq!(diff.node("C").map(|n| n.classification), Some(Classification::Added));
//! # Ok::<(), termdiff::TermDiffError>(())
//! ```

mod builder;
mod classification;
mod graph;

pub use builder::{DiffGraphBuilder, DISPLAY_PROPERTY};
pub use classification::{compare_properties, Classification, GraphSide, PropertyChange};
pub use graph::{ClassificationCounts, DiffEdge, DiffFilter, DiffGraph, DiffNode, DiffSummary};
