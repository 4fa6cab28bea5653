//! The mutable engine state: one pool per die type plus the roll flags.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::dice::{DiePool, DieSlot, Face};

/// Everything a renderer needs to draw the current dice.
///
/// Pools are stored in catalog order and are looked up by die key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineState {
    pools: Vec<DiePool>,
    rolled: bool,
    changed_since_roll: bool,
}

impl EngineState {
    /// The initial state for a catalog: nothing selected, nothing rolled.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            pools: catalog.iter().map(|d| DiePool::new(d.key.clone())).collect(),
            rolled: false,
            changed_since_roll: true,
        }
    }

    /// All pools in catalog order.
    pub fn pools(&self) -> &[DiePool] {
        &self.pools
    }

    /// The pool for a die key.
    pub fn pool(&self, key: &str) -> Option<&DiePool> {
        self.pools.iter().find(|p| p.key == key)
    }

    pub(crate) fn pool_mut(&mut self, key: &str) -> Option<&mut DiePool> {
        self.pools.iter_mut().find(|p| p.key == key)
    }

    pub(crate) fn pools_mut(&mut self) -> &mut [DiePool] {
        &mut self.pools
    }

    /// Selected count for a die key.
    pub fn count(&self, key: &str) -> Option<u32> {
        self.pool(key).map(DiePool::count)
    }

    /// `(key, count)` pairs in catalog order.
    pub fn counts(&self) -> impl Iterator<Item = (&str, u32)> {
        self.pools.iter().map(|p| (p.key.as_str(), p.count()))
    }

    /// Sum of all selected counts.
    pub fn total_selected(&self) -> u32 {
        self.pools.iter().map(DiePool::count).sum()
    }

    /// Rolled slots for a die key (empty for unknown keys).
    pub fn slots(&self, key: &str) -> &[DieSlot] {
        self.pool(key).map(DiePool::slots).unwrap_or(&[])
    }

    /// Rolled faces for a die key, in roll order.
    pub fn results(&self, key: &str) -> Vec<Face> {
        self.slots(key).iter().map(|s| s.face).collect()
    }

    /// Reroll counts for a die key, parallel to [`EngineState::results`].
    pub fn reroll_counts(&self, key: &str) -> Vec<u32> {
        self.slots(key).iter().map(|s| s.rerolls).collect()
    }

    /// True once a roll has happened (cleared by reset).
    pub fn is_rolled(&self) -> bool {
        self.rolled
    }

    /// True if counts were adjusted since the last roll, or nothing was rolled yet.
    pub fn has_changed_since_roll(&self) -> bool {
        self.changed_since_roll
    }

    pub(crate) fn mark_rolled(&mut self) {
        self.rolled = true;
        self.changed_since_roll = false;
    }

    pub(crate) fn mark_changed(&mut self) {
        self.changed_since_roll = true;
    }
}
