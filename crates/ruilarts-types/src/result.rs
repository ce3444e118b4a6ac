//! The immutable output of one matching run.

use serde::{Deserialize, Serialize};

use crate::{Circle, Participant, ParticipantId, Tier};

/// Per-tier slice of the statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierStatistics {
    pub tier: Tier,
    /// Participants matched at this tier.
    pub matched: usize,
    /// Circles found at this tier.
    pub circles: usize,
    /// `matched` as a percentage of all participants (`0.0` when empty).
    pub match_rate: f64,
}

/// Derived values over a [`MatchResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchStatistics {
    /// `total_matched + total_unmatched`.
    pub total_people: usize,
    /// Sum of all circle sizes.
    pub total_matched: usize,
    pub total_unmatched: usize,
    /// Percentage of people matched (`0.0` when `total_people == 0`).
    pub match_rate: f64,
    pub number_of_circles: usize,
    /// One entry per circle, same order as [`MatchResult::circles`].
    pub circle_sizes: Vec<usize>,
    /// `0.0` when there are no circles.
    pub average_circle_size: f64,
    /// One entry per tier the run cascaded through, in tier order.
    pub tiers: Vec<TierStatistics>,
}

impl MatchStatistics {
    /// Participants matched at `tier` (`0` for tiers the run never reached).
    #[must_use]
    pub fn matched_at(&self, tier: Tier) -> usize {
        self.tiers
            .iter()
            .find(|t| t.tier == tier)
            .map_or(0, |t| t.matched)
    }

    #[must_use]
    pub fn first_choice_count(&self) -> usize {
        self.matched_at(Tier::FIRST)
    }

    #[must_use]
    pub fn second_choice_count(&self) -> usize {
        self.matched_at(Tier::SECOND)
    }
}

/// Selected circles, the unmatched remainder, and derived statistics.
///
/// Every input participant appears exactly once: either inside exactly one
/// circle or in `unmatched_people`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Circles in selection order: tier by tier, smallest first within a tier.
    pub circles: Vec<Circle>,
    /// Unmatched participants, in input order.
    pub unmatched_people: Vec<Participant>,
    pub statistics: MatchStatistics,
    /// SHA-256 over circles and unmatched ids; equal inputs give equal
    /// fingerprints.
    pub fingerprint: [u8; 32],
}

impl MatchResult {
    #[must_use]
    pub fn total_people(&self) -> usize {
        self.statistics.total_people
    }

    #[must_use]
    pub fn total_matched(&self) -> usize {
        self.statistics.total_matched
    }

    #[must_use]
    pub fn match_rate(&self) -> f64 {
        self.statistics.match_rate
    }

    #[must_use]
    pub fn average_circle_size(&self) -> f64 {
        self.statistics.average_circle_size
    }

    #[must_use]
    pub fn circle_sizes(&self) -> &[usize] {
        &self.statistics.circle_sizes
    }

    /// The tier at which `id` was matched, if they were.
    #[must_use]
    pub fn tier_of(&self, id: &ParticipantId) -> Option<Tier> {
        self.circles
            .iter()
            .flat_map(|c| c.people.iter())
            .find(|e| &e.participant.id == id)
            .map(|e| e.tier)
    }

    /// The circle containing `id`, if any.
    #[must_use]
    pub fn circle_of(&self, id: &ParticipantId) -> Option<&Circle> {
        self.circles
            .iter()
            .find(|c| c.people.iter().any(|e| &e.participant.id == id))
    }

    #[must_use]
    pub fn is_unmatched(&self, id: &ParticipantId) -> bool {
        self.unmatched_people.iter().any(|p| &p.id == id)
    }

    #[must_use]
    pub fn fingerprint_hex(&self) -> String {
        hex::encode(self.fingerprint)
    }
}
