//! Configuration for a matching run.

use serde::{Deserialize, Serialize};

use crate::{Result, RuilartsError, constants};

/// What to do when two participants claim the same current slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotConflictPolicy {
    /// Fail the run with [`RuilartsError::ConflictingSlotOwnership`].
    #[default]
    Reject,
    /// The earliest participant in input order owns the slot; later
    /// claimants get no edge for it at any tier and stay unmatched.
    FirstWins,
}

/// Knobs for the cascading matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Number of preference tiers to cascade through.
    pub max_tiers: u8,
    /// Cycles longer than this are discarded. `None` keeps every cycle.
    pub max_cycle_length: Option<usize>,
    pub slot_conflict_policy: SlotConflictPolicy,
    /// Re-check partition, disjointness, minimality and tier attribution
    /// before returning a result.
    pub verify_invariants: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_tiers: constants::DEFAULT_MAX_TIERS,
            max_cycle_length: None,
            slot_conflict_policy: SlotConflictPolicy::Reject,
            verify_invariants: true,
        }
    }
}

impl MatcherConfig {
    #[must_use]
    pub fn with_max_cycle_length(mut self, max: usize) -> Self {
        self.max_cycle_length = Some(max);
        self
    }

    #[must_use]
    pub fn with_max_tiers(mut self, tiers: u8) -> Self {
        self.max_tiers = tiers;
        self
    }

    #[must_use]
    pub fn with_slot_conflict_policy(mut self, policy: SlotConflictPolicy) -> Self {
        self.slot_conflict_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_tiers == 0 || self.max_tiers > constants::MAX_PREFERENCE_TIERS {
            return Err(RuilartsError::Configuration(format!(
                "max_tiers must be in 1..={}, got {}",
                constants::MAX_PREFERENCE_TIERS,
                self.max_tiers
            )));
        }
        if let Some(max) = self.max_cycle_length {
            if max < constants::MIN_CYCLE_LENGTH {
                return Err(RuilartsError::Configuration(format!(
                    "max_cycle_length must be at least {}, got {max}",
                    constants::MIN_CYCLE_LENGTH
                )));
            }
        }
        Ok(())
    }

    /// Whether a cycle of `len` slots survives the length bound.
    #[must_use]
    pub fn admits_cycle_length(&self, len: usize) -> bool {
        len >= constants::MIN_CYCLE_LENGTH && self.max_cycle_length.is_none_or(|max| len <= max)
    }
}
