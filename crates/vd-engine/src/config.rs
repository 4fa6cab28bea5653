//! Configuration for a dice engine.

use serde::{Deserialize, Serialize};

/// Whether adjusting a count marks the state as changed when clamping left the
/// count where it was (for example decrementing a die that is already at 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangePolicy {
    /// Every adjustment marks the state as changed, even a clamped no-op.
    #[default]
    Always,
    /// Only adjustments that actually move a count mark the state as changed.
    OnMove,
}

impl ChangePolicy {
    /// Parse a policy name (`always` or `on-move`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "always" => Some(Self::Always),
            "on-move" | "on_move" | "onmove" => Some(Self::OnMove),
            _ => None,
        }
    }
}

/// Configuration for a dice engine.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// How count adjustments mark the state as changed.
    pub change_policy: ChangePolicy,
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the change policy.
    pub fn with_change_policy(mut self, policy: ChangePolicy) -> Self {
        self.change_policy = policy;
        self
    }
}
