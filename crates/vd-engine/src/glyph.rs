//! How a face value is drawn.
//!
//! The mapping is fixed: 1 is an X mark, 2 through 5 are pips on a 3x3 grid,
//! and 6 shows the die's six image (or the label `SIX` when it has none).

use crate::catalog::DieType;
use crate::dice::{DieSlot, Face};

/// Text used for a six when the die has no image.
pub const SIX_FALLBACK: &str = "SIX";

/// Number of cells in the pip grid.
pub const PIP_CELLS: usize = 9;

/// Visual form of a single face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceGlyph<'a> {
    /// A one: drawn as an "X".
    Cross,
    /// Two through five: pips lit on a row-major 3x3 grid.
    Pips {
        /// Face value, also the number of lit cells.
        value: u8,
        /// Which of the nine cells carry a pip.
        grid: [bool; PIP_CELLS],
    },
    /// A six: the die's image, or [`SIX_FALLBACK`].
    Six {
        /// Image path for this die's six, if it has one.
        asset: Option<&'a str>,
        /// Alt text naming the virtue.
        alt: String,
    },
}

/// Lit cells (row-major, 0-8) for values 2 through 5. Other values have none.
pub fn pip_pattern(value: u8) -> &'static [usize] {
    match value {
        2 => &[0, 8],
        3 => &[0, 4, 8],
        4 => &[0, 2, 6, 8],
        5 => &[0, 2, 4, 6, 8],
        _ => &[],
    }
}

/// The glyph for `face` on a die of type `die`.
pub fn glyph(face: Face, die: &DieType) -> FaceGlyph<'_> {
    match face.value() {
        1 => FaceGlyph::Cross,
        6 => FaceGlyph::Six {
            asset: die.six_asset.as_deref(),
            alt: format!("{} six", die.virtue),
        },
        value => {
            let mut grid = [false; PIP_CELLS];
            for &cell in pip_pattern(value) {
                grid[cell] = true;
            }
            FaceGlyph::Pips { value, grid }
        }
    }
}

/// Badge number for a slot: its reroll count once it has been rerolled.
pub fn reroll_badge(slot: &DieSlot) -> Option<u32> {
    slot.is_rerolled().then_some(slot.rerolls)
}
