//! Participant and preference tier types.
//!
//! A participant holds exactly one [`Slot`] and ranks the slots they want
//! instead. The rank of a desired slot is its [`Tier`] (1 = most preferred).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ParticipantId, RuilartsError, Result, Slot, constants};

/// Preference rank, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tier(pub u8);

impl Tier {
    pub const FIRST: Self = Self(1);
    pub const SECOND: Self = Self(2);

    /// Zero-based position in a participant's desired list.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0.saturating_sub(1))
    }

    /// Tiers `1..=max`, in cascade order.
    pub fn up_to(max: u8) -> impl Iterator<Item = Self> {
        (1..=max).map(Self)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => write!(f, "FIRST"),
            2 => write!(f, "SECOND"),
            3 => write!(f, "THIRD"),
            n => write!(f, "TIER_{n}"),
        }
    }
}

/// Someone who holds one slot and wants another.
///
/// Immutable for the duration of a matching run: the engine only ever
/// borrows or clones participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub current: Slot,
    /// Desired slots ranked by tier; `desired[0]` is the first choice.
    pub desired: Vec<Slot>,
}

impl Participant {
    #[must_use]
    pub fn new(
        id: impl Into<ParticipantId>,
        name: impl Into<String>,
        current: Slot,
        desired: Vec<Slot>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            current,
            desired,
        }
    }

    /// The slot wanted at `tier`, if the participant ranked that many.
    #[must_use]
    pub fn desired_at(&self, tier: Tier) -> Option<&Slot> {
        if tier.0 == 0 {
            return None;
        }
        self.desired.get(tier.index())
    }

    /// Intake validation for participants entering a registry.
    ///
    /// The matcher itself never calls this: a participant without a
    /// preference at some tier simply has no edge in that tier's graph.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(RuilartsError::InvalidParticipant {
                reason: "id must not be empty".into(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(RuilartsError::InvalidParticipant {
                reason: format!("{}: name must not be empty", self.id),
            });
        }
        if self.current.name.trim().is_empty() {
            return Err(RuilartsError::InvalidParticipant {
                reason: format!("{}: current slot has no name", self.id),
            });
        }
        if self.desired.is_empty() {
            return Err(RuilartsError::InvalidParticipant {
                reason: format!("{}: at least one desired slot is required", self.id),
            });
        }
        if self.desired.len() > usize::from(constants::MAX_PREFERENCE_TIERS) {
            return Err(RuilartsError::InvalidParticipant {
                reason: format!(
                    "{}: {} desired slots exceeds the limit of {}",
                    self.id,
                    self.desired.len(),
                    constants::MAX_PREFERENCE_TIERS
                ),
            });
        }
        if let Some(blank) = self.desired.iter().position(|s| s.name.trim().is_empty()) {
            return Err(RuilartsError::InvalidParticipant {
                reason: format!("{}: desired slot at tier {} has no name", self.id, blank + 1),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] at {}", self.name, self.id, self.current)
    }
}
