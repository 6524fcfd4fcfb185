//! Bounded-radius exploration of a diff graph around one focus code.
//!
//! A [`NeighborhoodSession`] computes undirected distances from the focus
//! once and then grows or shrinks the visible subgraph one layer at a time.
//! Every call to [`NeighborhoodSession::current_graph`] returns a
//! [`CombinedGraph`] snapshot that later layer changes leave untouched.
//!
//! ```
//! use std::sync::Arc;
//! use termdiff::diff::DiffGraphBuilder;
//! use termdiff::model::{Concept, ConceptEdge, ConceptGraph};
//! use termdiff::neighborhood::NeighborhoodSession;
//!
//! let mut left = ConceptGraph::new();
//! left.add_concept(Concept::new("A")).add_concept(Concept::new("B"));
//! left.add_edge(ConceptEdge::new("A", "B", "is-a"));
//! let mut right = ConceptGraph::new();
//! right.add_concept(Concept::new("B")).add_concept(Concept::new("C"));
//! right.add_edge(ConceptEdge::new("B", "C", "is-a"));
//!
//! let diff = Arc::new(DiffGraphBuilder::new().build(&left, &right)?);
//! let session = NeighborhoodSession::open(diff, "B")?;
//! let view = session.current_graph();
//! assert_eq!(view.vertex_count(), 3);
//! assert_eq!(view.edge_count(), 2);
//! # Ok::<(), termdiff::TermDiffError>(())
//! ```

mod combined;
mod session;

pub use combined::{CombinedEdge, CombinedGraph, CombinedVertex};
pub use session::NeighborhoodSession;
