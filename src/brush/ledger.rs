//! Placement Ledger
//!
//! The authoritative set of placed tiles. The visual structure is derived
//! from it and can always be rebuilt from it. The ledger never talks to the
//! undo log; callers snapshot before mutating.

use std::collections::BTreeSet;

use super::pose::{PlacementKey, PreviewPose};

/// Set of placed-tile keys, at most one tile per exact pose.
///
/// Ordered so that rebuilding the structure visits tiles in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementLedger {
    keys: BTreeSet<PlacementKey>,
}

impl PlacementLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the key for `pose`. Returns `false` if the pose is already occupied.
    pub fn try_place(&mut self, pose: &PreviewPose) -> bool {
        self.insert(pose.placement_key())
    }

    /// Insert a key directly. Returns `false` if it was already present.
    pub fn insert(&mut self, key: PlacementKey) -> bool {
        self.keys.insert(key)
    }

    /// Remove a key. Returns `false` if it was absent.
    pub fn remove(&mut self, key: &PlacementKey) -> bool {
        self.keys.remove(key)
    }

    pub fn contains(&self, key: &PlacementKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacementKey> {
        self.keys.iter()
    }
}
