//! Terminal UI for Virtue Dice.
//!
//! A single ratatui screen with the dice steppers on the left and the rolled
//! faces on the right. All state lives in the [`vd_engine::DiceEngine`] owned
//! by [`app::TuiApp`]; the view only reads it.

pub mod app;
pub mod logging;
pub mod shared;
pub mod terminal;
pub mod view;
