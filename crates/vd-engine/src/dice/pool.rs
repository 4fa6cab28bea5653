//! Per-type selection count and rolled slots.

use rand::Rng;
use serde::Serialize;

use super::{DieSlot, Face, Step};

/// The dice of one type: how many are selected, and what the last roll showed.
///
/// `slots.len()` equals `count` as of the most recent roll. Adjusting `count`
/// afterwards does not touch the slots until the next roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiePool {
    /// Key of the die type this pool belongs to.
    pub key: String,
    count: u32,
    slots: Vec<DieSlot>,
}

impl DiePool {
    /// An empty pool for the given die key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            count: 0,
            slots: Vec::new(),
        }
    }

    /// Number of dice currently selected.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The rolled dice, in roll order.
    pub fn slots(&self) -> &[DieSlot] {
        &self.slots
    }

    /// Adjust the selected count by one, clamped. Returns true if it moved.
    pub fn step(&mut self, step: Step) -> bool {
        let next = step.apply(self.count);
        let moved = next != self.count;
        self.count = next;
        moved
    }

    /// Replace all slots with `count` fresh dice.
    pub fn roll<R: Rng>(&mut self, rng: &mut R) {
        self.slots = (0..self.count)
            .map(|_| DieSlot::fresh(Face::roll(rng)))
            .collect();
    }

    /// Reroll one slot. Returns the updated slot, or `None` if `index` is out of range.
    pub fn reroll<R: Rng>(&mut self, index: usize, rng: &mut R) -> Option<DieSlot> {
        let slot = self.slots.get_mut(index)?;
        slot.reroll(rng);
        Some(*slot)
    }
}
