//! Stable, collision-free color assignment for diff elements.
//!
//! Colors are handed out per [`ColorBucket`] from fixed qualitative palettes.
//! A key keeps its color for the lifetime of the registry, so independently
//! rendered views (the full diff graph, a neighborhood, a legend) agree on
//! what a color means. Assignment depends on call order only; two processes
//! visiting keys in a different order may color them differently.

mod palette;
mod registry;

pub use palette::{Color, ACCENT, SIDES, TAB10};
pub use registry::{ColorBucket, ColorRegistry, LegendEntry};
