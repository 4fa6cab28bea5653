//! Derived UI state: button labels, enablement, and status text.
//!
//! This is the whole contract between the engine and a renderer for anything
//! that is not the raw dice. It is recomputed from scratch after every command.

use serde::Serialize;

use crate::dice::MAX_DICE;
use crate::state::EngineState;

/// Label on the primary (roll) button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrimaryLabel {
    /// No roll yet, or counts changed since the last one.
    Roll,
    /// The current selection was already rolled; pressing rolls it again.
    Reroll,
}

impl PrimaryLabel {
    /// Button text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Roll => "Roll",
            Self::Reroll => "Re-roll",
        }
    }
}

impl std::fmt::Display for PrimaryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    /// Nothing selected and nothing rolled.
    SetCounts,
    /// Dice selected but not rolled yet.
    Ready(u32),
    /// Results are showing.
    TapToReroll,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SetCounts => f.write_str("Set dice counts, then roll."),
            Self::Ready(n) => write!(f, "Ready: {n} dice selected."),
            Self::TapToReroll => f.write_str("Tap any die to re-roll it."),
        }
    }
}

/// The hint line under the buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Hint {
    /// Shown before the first roll.
    BeforeRoll,
    /// Shown once results exist.
    AfterRoll,
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BeforeRoll => f.write_str("Tip: Set dice counts, then roll."),
            Self::AfterRoll => {
                f.write_str("Tip: Change counts to roll again, or Re-roll to repeat.")
            }
        }
    }
}

/// Stepper state for one die type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DieControls {
    /// Die key.
    pub key: String,
    /// Currently selected count.
    pub count: u32,
    /// Whether the "-" button is usable.
    pub can_decrement: bool,
    /// Whether the "+" button is usable.
    pub can_increment: bool,
}

/// Everything a renderer shows besides the dice themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiState {
    /// Sum of all selected counts.
    pub total_selected: u32,
    /// Primary button label.
    pub primary_label: PrimaryLabel,
    /// Whether the primary button is usable.
    pub primary_enabled: bool,
    /// Whether the reset button is usable.
    pub reset_enabled: bool,
    /// Status line.
    pub status: Status,
    /// Hint line.
    pub hint: Hint,
    /// Per-die stepper state, in catalog order.
    pub controls: Vec<DieControls>,
}

impl UiState {
    /// Derive the UI state from an engine state.
    pub fn derive(state: &EngineState) -> Self {
        let total = state.total_selected();
        let rolled = state.is_rolled();

        let primary_label = if rolled && !state.has_changed_since_roll() {
            PrimaryLabel::Reroll
        } else {
            PrimaryLabel::Roll
        };

        let status = match (rolled, total) {
            (false, 0) => Status::SetCounts,
            (false, n) => Status::Ready(n),
            (true, _) => Status::TapToReroll,
        };

        let hint = if rolled {
            Hint::AfterRoll
        } else {
            Hint::BeforeRoll
        };

        let controls = state
            .counts()
            .map(|(key, count)| DieControls {
                key: key.to_string(),
                count,
                can_decrement: count > 0,
                can_increment: count < MAX_DICE,
            })
            .collect();

        Self {
            total_selected: total,
            primary_label,
            primary_enabled: total > 0,
            reset_enabled: rolled || total > 0,
            status,
            hint,
            controls,
        }
    }
}
