//! Provenance and change classification of diff elements.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which input(s) a diff element exists in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphSide {
    Left,
    Right,
    Both,
}

impl GraphSide {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Both => "both",
        }
    }

    /// The side this element would have if the inputs were swapped.
    #[must_use]
    pub const fn swap(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Both => Self::Both,
        }
    }

    /// Side of an element present in `in_left` and/or `in_right`.
    ///
    /// Returns `None` if it is in neither.
    #[must_use]
    pub const fn from_membership(in_left: bool, in_right: bool) -> Option<Self> {
        match (in_left, in_right) {
            (true, true) => Some(Self::Both),
            (true, false) => Some(Self::Left),
            (false, true) => Some(Self::Right),
            (false, false) => None,
        }
    }
}

impl fmt::Display for GraphSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Change classification of a node or edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Only in the right input
    Added,
    /// Only in the left input
    Removed,
    /// In both inputs with equal compared values
    Unchanged,
    /// In both inputs with at least one differing compared value
    Changed,
}

impl Classification {
    pub const ALL: [Self; 4] = [Self::Added, Self::Removed, Self::Unchanged, Self::Changed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Unchanged => "unchanged",
            Self::Changed => "changed",
        }
    }

    /// Classify by side; `differs` only matters for [`GraphSide::Both`].
    #[must_use]
    pub const fn classify(side: GraphSide, differs: bool) -> Self {
        match side {
            GraphSide::Left => Self::Removed,
            GraphSide::Right => Self::Added,
            GraphSide::Both if differs => Self::Changed,
            GraphSide::Both => Self::Unchanged,
        }
    }

    /// The classification this element would have if the inputs were swapped.
    #[must_use]
    pub const fn swap(self) -> Self {
        match self {
            Self::Added => Self::Removed,
            Self::Removed => Self::Added,
            other => other,
        }
    }

    #[must_use]
    pub const fn is_change(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A property whose value differs between the two sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyChange {
    pub property: String,
    pub left: Option<String>,
    pub right: Option<String>,
}

/// Compare two property maps over the union of their keys.
///
/// A key present on one side only counts as a difference. Keys listed in
/// `ignored` are skipped. Result is ordered by property code.
#[must_use]
pub fn compare_properties(
    left: &BTreeMap<String, String>,
    right: &BTreeMap<String, String>,
    ignored: &[String],
) -> Vec<PropertyChange> {
    let mut keys: Vec<&String> = left.keys().chain(right.keys()).collect();
    keys.sort();
    keys.dedup();

    keys.into_iter()
        .filter(|key| !ignored.iter().any(|i| i == *key))
        .filter_map(|key| {
            let l = left.get(key);
            let r = right.get(key);
            (l != r).then(|| PropertyChange {
                property: key.clone(),
                left: l.cloned(),
                right: r.cloned(),
            })
        })
        .collect()
}
