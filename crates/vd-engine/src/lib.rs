//! Dice state engine for Virtue Dice.
//!
//! Tracks how many dice of each of four colored types are selected, rolls
//! them, and lets any single face be rerolled without limit while counting
//! each reroll. Renderers read [`EngineState`] and [`UiState`] after every
//! command and never mutate either.

pub mod catalog;
pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod glyph;
pub mod session;
pub mod state;
pub mod ui;

pub use catalog::{CATALOG_SIZE, Catalog, ClassColor, DieType};
pub use config::{ChangePolicy, EngineConfig};
pub use dice::{DiePool, DieSlot, Face, MAX_DICE, Step};
pub use engine::DiceEngine;
pub use error::{EngineError, EngineResult, SessionError, SessionResult};
pub use glyph::{FaceGlyph, glyph, reroll_badge};
pub use session::Session;
pub use state::EngineState;
pub use ui::{DieControls, Hint, PrimaryLabel, Status, UiState};
