//! A single rolled die and its reroll history.

use rand::Rng;
use serde::Serialize;

use super::Face;

/// One rolled die: its current face and how many times it was rerolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DieSlot {
    /// The value currently showing.
    pub face: Face,
    /// Number of rerolls since the last full roll.
    pub rerolls: u32,
}

impl DieSlot {
    /// A freshly rolled die with no rerolls.
    pub fn fresh(face: Face) -> Self {
        Self { face, rerolls: 0 }
    }

    /// Redraw this die in place and count the reroll.
    pub fn reroll<R: Rng>(&mut self, rng: &mut R) {
        self.face = Face::roll(rng);
        self.rerolls += 1;
    }

    /// True once the die has been rerolled at least once.
    pub fn is_rerolled(&self) -> bool {
        self.rerolls > 0
    }
}

impl std::fmt::Display for DieSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.rerolls > 0 {
            write!(f, "{} (x{})", self.face, self.rerolls)
        } else {
            write!(f, "{}", self.face)
        }
    }
}
