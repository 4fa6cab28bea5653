//! The dice engine: owns the catalog, the state, and the RNG, and applies commands.
//!
//! Commands never fail. Counts clamp to `0..=MAX_DICE`, a roll with nothing
//! selected is ignored, and a reroll that names an unknown die, a stale index,
//! or arrives before any roll is ignored too. Return values report what
//! happened so callers can give feedback, but ignoring them is always safe.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::{ChangePolicy, EngineConfig};
use crate::dice::{DieSlot, Step};
use crate::state::EngineState;
use crate::ui::UiState;

/// A dice selection and rolling session.
pub struct DiceEngine {
    catalog: Catalog,
    state: EngineState,
    config: EngineConfig,
    rng: StdRng,
}

impl DiceEngine {
    /// Create an engine in its initial state.
    pub fn new(catalog: Catalog, config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let state = EngineState::new(&catalog);
        Self {
            catalog,
            state,
            config,
            rng,
        }
    }

    /// The die catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current state.
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Derive button and status state for renderers.
    pub fn ui(&self) -> UiState {
        UiState::derive(&self.state)
    }

    /// Move one die type's count up or down by one, clamped.
    ///
    /// Returns the resulting count, or `None` for an unknown key.
    pub fn adjust_count(&mut self, key: &str, step: Step) -> Option<u32> {
        let pool = self.state.pool_mut(key)?;
        let moved = pool.step(step);
        let count = pool.count();

        if moved || self.config.change_policy == ChangePolicy::Always {
            self.state.mark_changed();
        }

        debug!(key, ?step, count, moved, "adjusted count");
        Some(count)
    }

    /// Add one die of the given type.
    pub fn increment(&mut self, key: &str) -> Option<u32> {
        self.adjust_count(key, Step::Up)
    }

    /// Remove one die of the given type.
    pub fn decrement(&mut self, key: &str) -> Option<u32> {
        self.adjust_count(key, Step::Down)
    }

    /// Roll every selected die, discarding all earlier results and reroll counts.
    ///
    /// Returns false (and changes nothing) when no dice are selected.
    pub fn roll(&mut self) -> bool {
        let total = self.state.total_selected();
        if total == 0 {
            debug!("roll ignored: no dice selected");
            return false;
        }

        let rng = &mut self.rng;
        for pool in self.state.pools_mut() {
            pool.roll(rng);
        }
        self.state.mark_rolled();

        debug!(total, "rolled");
        true
    }

    /// Reroll one face in place and count it.
    ///
    /// Returns the updated slot, or `None` if nothing has been rolled, the key
    /// is unknown, or the index is out of range.
    pub fn reroll(&mut self, key: &str, index: usize) -> Option<DieSlot> {
        if !self.state.is_rolled() {
            debug!(key, index, "reroll ignored: nothing rolled");
            return None;
        }

        let slot = self
            .state
            .pool_mut(key)
            .and_then(|pool| pool.reroll(index, &mut self.rng));

        match slot {
            Some(slot) => debug!(
                key,
                index,
                face = slot.face.value(),
                rerolls = slot.rerolls,
                "rerolled"
            ),
            None => debug!(key, index, "reroll ignored: no such face"),
        }
        slot
    }

    /// Return to the initial state. The catalog and RNG are kept.
    pub fn reset(&mut self) {
        self.state = EngineState::new(&self.catalog);
        debug!("reset");
    }
}

impl Default for DiceEngine {
    fn default() -> Self {
        Self::new(Catalog::default(), EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{PrimaryLabel, Status};

    fn seeded() -> DiceEngine {
        DiceEngine::new(Catalog::default(), EngineConfig::default().with_seed(42))
    }

    fn seeded_with(policy: ChangePolicy) -> DiceEngine {
        DiceEngine::new(
            Catalog::default(),
            EngineConfig::default()
                .with_seed(42)
                .with_change_policy(policy),
        )
    }

    /// Two blue dice rolled, nothing else selected.
    fn scenario_a() -> DiceEngine {
        let mut e = seeded();
        e.increment("blue");
        e.increment("blue");
        assert!(e.roll());
        e
    }

    #[test]
    fn scenario_a_roll_two_blue() {
        let e = scenario_a();
        let s = e.state();
        assert_eq!(s.results("blue").len(), 2);
        assert!(s.results("yellow").is_empty());
        assert!(s.results("red").is_empty());
        assert!(s.results("purple").is_empty());
        assert!(s.is_rolled());
        assert_eq!(e.ui().primary_label, PrimaryLabel::Reroll);
        assert_eq!(e.ui().status, Status::TapToReroll);
    }

    #[test]
    fn scenario_b_decrement_to_zero_after_roll() {
        let mut e = scenario_a();
        e.decrement("blue");
        e.decrement("blue");
        assert_eq!(e.state().count("blue"), Some(0));
        assert!(e.state().has_changed_since_roll());
        let ui = e.ui();
        assert_eq!(ui.primary_label, PrimaryLabel::Roll);
        assert!(!ui.primary_enabled);
        // old results stay until the next roll
        assert_eq!(e.state().results("blue").len(), 2);
        assert!(ui.reset_enabled);
    }

    #[test]
    fn scenario_c_reroll_same_face_three_times() {
        let mut e = scenario_a();
        let mut last = None;
        for _ in 0..3 {
            last = e.reroll("blue", 0);
        }
        let last = last.unwrap();
        assert_eq!(e.state().reroll_counts("blue"), vec![3, 0]);
        assert_eq!(e.state().results("blue")[0], last.face);
        assert_eq!(last.rerolls, 3);
    }

    #[test]
    fn scenario_d_reset_from_rolled() {
        let mut e = scenario_a();
        e.reroll("blue", 1);
        e.increment("red");
        e.reset();
        let s = e.state();
        assert!(s.counts().all(|(_, c)| c == 0));
        for die in e.catalog() {
            assert!(s.results(&die.key).is_empty());
            assert!(s.reroll_counts(&die.key).is_empty());
        }
        assert!(!s.is_rolled());
        assert!(s.has_changed_since_roll());
        assert_eq!(e.ui().status, Status::SetCounts);
    }

    #[test]
    fn reset_matches_initial_and_is_idempotent() {
        let initial = EngineState::new(&Catalog::default());
        let mut e = scenario_a();
        e.reset();
        assert_eq!(e.state(), &initial);
        e.reset();
        assert_eq!(e.state(), &initial);
    }

    #[test]
    fn roll_with_nothing_selected_is_noop() {
        let mut e = seeded();
        let before = e.state().clone();
        assert!(!e.roll());
        assert_eq!(e.state(), &before);
    }

    #[test]
    fn roll_is_global() {
        let mut e = seeded();
        e.increment("blue");
        e.increment("red");
        e.roll();
        e.reroll("blue", 0);
        e.reroll("red", 0);
        e.roll();
        assert_eq!(e.state().reroll_counts("blue"), vec![0]);
        assert_eq!(e.state().reroll_counts("red"), vec![0]);
    }

    #[test]
    fn roll_resyncs_lengths_with_counts() {
        let mut e = scenario_a();
        e.decrement("blue");
        e.increment("purple");
        e.increment("purple");
        e.increment("purple");
        assert_eq!(e.state().results("blue").len(), 2);
        e.roll();
        assert_eq!(e.state().results("blue").len(), 1);
        assert_eq!(e.state().results("purple").len(), 3);
        assert_eq!(e.ui().primary_label, PrimaryLabel::Reroll);
    }

    #[test]
    fn reroll_before_roll_is_noop() {
        let mut e = seeded();
        e.increment("blue");
        assert!(e.reroll("blue", 0).is_none());
        assert!(e.state().results("blue").is_empty());
    }

    #[test]
    fn reroll_invalid_key_or_index_is_noop() {
        let mut e = scenario_a();
        let before = e.state().clone();
        assert!(e.reroll("green", 0).is_none());
        assert!(e.reroll("blue", 2).is_none());
        assert!(e.reroll("yellow", 0).is_none());
        assert_eq!(e.state(), &before);
    }

    #[test]
    fn reroll_after_reset_is_noop() {
        let mut e = scenario_a();
        e.reset();
        assert!(e.reroll("blue", 0).is_none());
    }

    #[test]
    fn reroll_does_not_touch_change_flag_or_counts() {
        let mut e = scenario_a();
        e.reroll("blue", 1);
        assert!(!e.state().has_changed_since_roll());
        assert_eq!(e.state().count("blue"), Some(2));
        assert_eq!(e.ui().primary_label, PrimaryLabel::Reroll);
    }

    #[test]
    fn adjust_unknown_key() {
        let mut e = seeded();
        assert_eq!(e.increment("green"), None);
        assert_eq!(e.state().total_selected(), 0);
    }

    #[test]
    fn counts_clamp_at_max() {
        let mut e = seeded();
        for _ in 0..10 {
            e.increment("yellow");
        }
        assert_eq!(e.state().count("yellow"), Some(4));
        let controls = &e.ui().controls[1];
        assert!(controls.can_decrement);
        assert!(!controls.can_increment);
    }

    #[test]
    fn always_policy_marks_clamped_decrement() {
        let mut e = scenario_a();
        assert!(!e.state().has_changed_since_roll());
        assert_eq!(e.decrement("red"), Some(0));
        assert!(e.state().has_changed_since_roll());
        assert_eq!(e.ui().primary_label, PrimaryLabel::Roll);
    }

    #[test]
    fn on_move_policy_ignores_clamped_decrement() {
        let mut e = seeded_with(ChangePolicy::OnMove);
        e.increment("blue");
        e.roll();
        assert_eq!(e.decrement("red"), Some(0));
        assert!(!e.state().has_changed_since_roll());
        assert_eq!(e.ui().primary_label, PrimaryLabel::Reroll);

        e.decrement("blue");
        assert!(e.state().has_changed_since_roll());
    }

    #[test]
    fn on_move_policy_ignores_clamped_increment() {
        let mut e = seeded_with(ChangePolicy::OnMove);
        for _ in 0..4 {
            e.increment("purple");
        }
        e.roll();
        e.increment("purple");
        assert!(!e.state().has_changed_since_roll());
    }

    #[test]
    fn ready_status_counts_selection() {
        let mut e = seeded();
        e.increment("blue");
        e.increment("red");
        e.increment("red");
        let ui = e.ui();
        assert_eq!(ui.status, Status::Ready(3));
        assert_eq!(ui.status.to_string(), "Ready: 3 dice selected.");
        assert!(ui.primary_enabled);
        assert!(ui.reset_enabled);
    }

    #[test]
    fn same_seed_same_rolls() {
        let mut a = scenario_a();
        let mut b = scenario_a();
        assert_eq!(a.state(), b.state());
        a.reroll("blue", 0);
        b.reroll("blue", 0);
        assert_eq!(a.state(), b.state());
    }
}
