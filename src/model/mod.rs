//! Input data model for terminology comparison.
//!
//! A [`ConceptGraph`] is one side (left or right) of a comparison: the
//! concepts of a terminology resource version and their typed relations.
//! Terminology sources produce these; the diff builder consumes them.

mod concept;

pub use concept::*;
