//! Faces, per-die slots, and the per-type pool of rolled dice.
//!
//! Every die is a plain d6. A rolled die lives in a [`DieSlot`] that pairs its
//! current [`Face`] with the number of times it has been rerolled, so the two
//! can never drift apart.

pub mod pool;
pub mod slot;

pub use pool::DiePool;
pub use slot::DieSlot;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Maximum number of dice that can be selected per die type.
pub const MAX_DICE: u32 = 4;

/// Number of sides on every die.
pub const SIDES: u8 = 6;

/// The showing value of a single rolled die, always in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Face(u8);

impl Face {
    /// Create a face, or `None` if `value` is outside `1..=6`.
    pub fn new(value: u8) -> Option<Self> {
        (1..=SIDES).contains(&value).then_some(Self(value))
    }

    /// Draw a face uniformly at random.
    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        Self(rng.random_range(1..=SIDES))
    }

    /// The face value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Face {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("face value {value} out of range 1..=6"))
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> Self {
        face.0
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a single count adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Add one die (the "+" button).
    Up,
    /// Remove one die (the "-" button).
    Down,
}

impl Step {
    /// Apply this step to `count`, clamped to `0..=MAX_DICE`.
    pub fn apply(self, count: u32) -> u32 {
        match self {
            Self::Up => (count + 1).min(MAX_DICE),
            Self::Down => count.saturating_sub(1),
        }
    }
}
