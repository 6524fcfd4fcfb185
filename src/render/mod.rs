//! Bridge between the core graphs and an external renderer.
//!
//! The core decides what each element looks like ([`ElementStyle`]) but not
//! where it goes. Placement and drawing belong to whatever implements
//! [`LayoutOutput`].

mod labels;
mod style;

pub use labels::{edge_label, edge_tooltip, side_display, vertex_label, vertex_tooltip};
pub use style::{DiffStyle, ElementStyle, LayoutOutput, StyleProvider};

use crate::color::{ColorBucket, ColorRegistry, LegendEntry};

/// Legend of a color bucket, in assignment order.
#[must_use]
pub fn legend(registry: &ColorRegistry, bucket: ColorBucket) -> Vec<LegendEntry> {
    registry.snapshot(bucket)
}
