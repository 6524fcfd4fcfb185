//! Append-only color assignment per semantic key.

use super::palette::{Color, ACCENT, SIDES, TAB10};
use crate::error::{Result, TermDiffError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

/// Independent color-assignment namespace.
///
/// Distinct keys only avoid collisions within the same bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorBucket {
    /// Keyed by diff classification (added, removed, ...)
    Classification,
    /// Keyed by graph side (left, right, both)
    Side,
    /// Keyed by relationship/property code of an edge
    Relationship,
}

impl ColorBucket {
    pub const ALL: [Self; 3] = [Self::Classification, Self::Side, Self::Relationship];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classification => "classification",
            Self::Side => "side",
            Self::Relationship => "relationship",
        }
    }
}

impl fmt::Display for ColorBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One assigned (key, color) pair, as shown in a legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub key: String,
    pub color: Color,
}

#[derive(Debug)]
struct Bucket {
    palette: Vec<Color>,
    /// Insertion order is assignment order
    entries: IndexMap<String, Color>,
}

impl Bucket {
    fn new(palette: Vec<Color>) -> Self {
        Self {
            palette,
            entries: IndexMap::new(),
        }
    }

    /// Returns the color and whether it was newly assigned.
    fn color_for(&mut self, key: &str) -> (Color, bool) {
        if let Some(color) = self.entries.get(key) {
            return (*color, false);
        }
        // wraps once the palette is exhausted
        let color = self.palette[self.entries.len() % self.palette.len()];
        self.entries.insert(key.to_string(), color);
        (color, true)
    }
}

/// Process-wide mapping from semantic keys to visually distinct colors.
///
/// The first lookup of a key picks the next unused palette slot, in
/// first-seen order; every later lookup returns the same color. Entries are
/// never removed. When a bucket's palette is exhausted, slots are reused
/// cyclically.
///
/// Each bucket has its own lock, so lookup-then-assign is atomic per bucket
/// and two keys can never claim the same slot concurrently.
#[derive(Debug)]
pub struct ColorRegistry {
    classification: Mutex<Bucket>,
    side: Mutex<Bucket>,
    relationship: Mutex<Bucket>,
}

static GLOBAL: OnceLock<Arc<ColorRegistry>> = OnceLock::new();

impl ColorRegistry {
    /// Create an isolated registry with the default palettes: [`TAB10`] for
    /// classifications, [`SIDES`] for sides and [`ACCENT`] for relationships.
    #[must_use]
    pub fn new() -> Self {
        Self {
            classification: Mutex::new(Bucket::new(TAB10.to_vec())),
            side: Mutex::new(Bucket::new(SIDES.to_vec())),
            relationship: Mutex::new(Bucket::new(ACCENT.to_vec())),
        }
    }

    /// The registry shared by the whole process.
    ///
    /// Created on first use and kept for the lifetime of the process.
    pub fn global() -> Arc<Self> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::new())))
    }

    /// Replace the palette of `bucket`. Only valid before any color was
    /// assigned in that bucket.
    pub fn with_palette(self, bucket: ColorBucket, palette: Vec<Color>) -> Result<Self> {
        if palette.is_empty() {
            return Err(TermDiffError::config(format!(
                "palette for bucket '{bucket}' must not be empty"
            )));
        }
        {
            let mut guard = self.lock(bucket);
            if !guard.entries.is_empty() {
                return Err(TermDiffError::config(format!(
                    "bucket '{bucket}' already has assigned colors"
                )));
            }
            guard.palette = palette;
        }
        Ok(self)
    }

    /// Color for `key` in `bucket`, assigning one on first sight.
    pub fn color_for(&self, bucket: ColorBucket, key: &str) -> Color {
        let mut guard = self.lock(bucket);
        let (color, assigned) = guard.color_for(key);
        if assigned {
            let slot = guard.entries.len();
            if slot > guard.palette.len() {
                tracing::debug!(
                    "palette for bucket '{}' exhausted, reusing {} for '{}'",
                    bucket,
                    color,
                    key
                );
            } else {
                tracing::debug!("generated color {} for '{}' in bucket '{}'", color, key, bucket);
            }
        }
        color
    }

    /// Current assignments of `bucket`, in assignment order.
    #[must_use]
    pub fn snapshot(&self, bucket: ColorBucket) -> Vec<LegendEntry> {
        self.lock(bucket)
            .entries
            .iter()
            .map(|(key, color)| LegendEntry {
                key: key.clone(),
                color: *color,
            })
            .collect()
    }

    /// Color already assigned to `key`, without assigning one.
    #[must_use]
    pub fn lookup(&self, bucket: ColorBucket, key: &str) -> Option<Color> {
        self.lock(bucket).entries.get(key).copied()
    }

    /// Number of keys with an assigned color in `bucket`.
    #[must_use]
    pub fn len(&self, bucket: ColorBucket) -> usize {
        self.lock(bucket).entries.len()
    }

    #[must_use]
    pub fn is_empty(&self, bucket: ColorBucket) -> bool {
        self.len(bucket) == 0
    }

    /// Size of the palette backing `bucket`.
    #[must_use]
    pub fn palette_len(&self, bucket: ColorBucket) -> usize {
        self.lock(bucket).palette.len()
    }

    fn lock(&self, bucket: ColorBucket) -> MutexGuard<'_, Bucket> {
        let mutex = match bucket {
            ColorBucket::Classification => &self.classification,
            ColorBucket::Side => &self.side,
            ColorBucket::Relationship => &self.relationship,
        };
        // a panic while holding the lock cannot leave a half-inserted entry
        mutex.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ColorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_key_same_color() {
        let registry = ColorRegistry::new();
        let first = registry.color_for(ColorBucket::Relationship, "is-a");
        let second = registry.color_for(ColorBucket::Relationship, "is-a");
        assert_eq!(first, second);
        assert_eq!(registry.len(ColorBucket::Relationship), 1);
    }

    #[test]
    fn test_distinct_keys_distinct_colors_until_exhaustion() {
        let registry = ColorRegistry::new();
        let colors: HashSet<_> = (0..ACCENT.len())
            .map(|i| registry.color_for(ColorBucket::Relationship, &format!("rel-{i}")))
            .collect();
        assert_eq!(colors.len(), ACCENT.len());
    }

    #[test]
    fn test_first_seen_order_not_sorted() {
        let registry = ColorRegistry::new();
        let z = registry.color_for(ColorBucket::Side, "zeta");
        let a = registry.color_for(ColorBucket::Side, "alpha");
        assert_eq!(z, SIDES[0]);
        assert_eq!(a, SIDES[1]);

        let keys: Vec<_> = registry
            .snapshot(ColorBucket::Side)
            .into_iter()
            .map(|e| e.key)
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_exhaustion_wraps_around() {
        let registry = ColorRegistry::new()
            .with_palette(ColorBucket::Relationship, ACCENT[..2].to_vec())
            .expect("fresh bucket");
        let a = registry.color_for(ColorBucket::Relationship, "a");
        let _b = registry.color_for(ColorBucket::Relationship, "b");
        let c = registry.color_for(ColorBucket::Relationship, "c");
        assert_eq!(a, c, "third key reuses the first slot");
        assert_eq!(registry.len(ColorBucket::Relationship), 3);
    }

    #[test]
    fn test_buckets_are_independent() {
        let registry = ColorRegistry::new();
        assert_eq!(registry.color_for(ColorBucket::Relationship, "is-a"), ACCENT[0]);
        assert_eq!(registry.color_for(ColorBucket::Side, "left"), SIDES[0]);
        assert!(registry.is_empty(ColorBucket::Classification));
        assert_eq!(registry.color_for(ColorBucket::Classification, "added"), TAB10[0]);
    }

    #[test]
    fn test_side_and_classification_never_share_a_color() {
        let registry = ColorRegistry::new();
        let classifications: HashSet<_> = ["removed", "unchanged", "added", "changed"]
            .iter()
            .map(|k| registry.color_for(ColorBucket::Classification, k))
            .collect();
        for side in ["left", "both", "right"] {
            let color = registry.color_for(ColorBucket::Side, side);
            assert!(!classifications.contains(&color), "{side} reuses a classification color");
        }
    }

    #[test]
    fn test_lookup_does_not_assign() {
        let registry = ColorRegistry::new();
        assert_eq!(registry.lookup(ColorBucket::Side, "left"), None);
        assert!(registry.is_empty(ColorBucket::Side));
    }

    #[test]
    fn test_palette_replacement_rules() {
        assert!(ColorRegistry::new()
            .with_palette(ColorBucket::Side, Vec::new())
            .is_err());

        let registry = ColorRegistry::new();
        registry.color_for(ColorBucket::Side, "left");
        assert!(registry.with_palette(ColorBucket::Side, ACCENT.to_vec()).is_err());
    }

    #[test]
    fn test_concurrent_assignment_never_duplicates_slots() {
        let registry = Arc::new(ColorRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    (0..4)
                        .map(|i| {
                            let key = format!("k{}", (t + i) % 10);
                            (key.clone(), registry.color_for(ColorBucket::Classification, &key))
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut observed = std::collections::HashMap::new();
        for handle in handles {
            for (key, color) in handle.join().expect("thread finished") {
                let prev = observed.insert(key.clone(), color);
                assert!(prev.is_none() || prev == Some(color), "{key} changed color");
            }
        }

        let snapshot = registry.snapshot(ColorBucket::Classification);
        let colors: HashSet<_> = snapshot.iter().map(|e| e.color).collect();
        assert_eq!(colors.len(), snapshot.len(), "no two keys share a slot");
    }

    #[test]
    fn test_global_is_shared() {
        let a = ColorRegistry::global();
        let b = ColorRegistry::global();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
