//! Cascading preference resolver.
//!
//! ```text
//! find_matches(&[Participant]) -> MatchResult
//! ```
//!
//! ## Algorithm
//!
//! For each tier `1..=max_tiers`, while anyone is left:
//! 1. Build the tier graph over participants still unmatched
//! 2. Enumerate its cycles
//! 3. Select a slot-disjoint subset, smallest first
//! 4. Tag members with the tier and remove them from the pool
//!
//! Then aggregate the circles and the remainder into a [`MatchResult`].
//!
//! ## Determinism Guarantee
//!
//! The output is a pure function of the snapshot and the config: the same
//! participants in the same order produce the same circles in the same
//! order, and therefore the same fingerprint.

use std::collections::HashSet;

use ruilarts_types::{
    Circle, MatchResult, MatcherConfig, MatchingAlgorithm, Participant, ParticipantId, Result,
    RuilartsError, Tier, constants,
};

use crate::aggregate::assemble_result;
use crate::cycles::enumerate_cycles;
use crate::graph::build_tier_graph;
use crate::invariants::check_result;
use crate::selector::select_disjoint;

/// The cycle matcher. Holds configuration only; every run starts fresh.
#[derive(Debug, Clone, Default)]
pub struct CircleMatcher {
    config: MatcherConfig,
}

impl CircleMatcher {
    /// Create a matcher after validating `config`.
    pub fn new(config: MatcherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Run the full cascade over `participants`.
    ///
    /// # Errors
    /// - [`RuilartsError::DuplicateParticipant`] if two entries share an id
    /// - [`RuilartsError::ConflictingSlotOwnership`] if two entries hold the
    ///   same slot and the policy is `Reject`
    /// - [`RuilartsError::InvariantViolation`] if verification is enabled
    ///   and the result fails it
    pub fn run(&self, participants: &[Participant]) -> Result<MatchResult> {
        let mut ids: HashSet<&ParticipantId> = HashSet::with_capacity(participants.len());
        for p in participants {
            if !ids.insert(&p.id) {
                return Err(RuilartsError::DuplicateParticipant(p.id.clone()));
            }
        }

        let policy = self.config.slot_conflict_policy;
        let mut pool: Vec<&Participant> = participants.iter().collect();
        let mut matched: HashSet<&ParticipantId> = HashSet::new();
        let mut claimed: HashSet<&str> = HashSet::new();
        let mut circles: Vec<Circle> = Vec::new();

        for tier in Tier::up_to(self.config.max_tiers) {
            if pool.is_empty() {
                break;
            }

            let graph = build_tier_graph(pool.iter().copied(), tier, policy)?;
            let candidates = enumerate_cycles(&graph, &self.config);
            let candidate_count = candidates.len();
            let selected = select_disjoint(&graph, candidates);

            let mut tier_matched = 0usize;
            for cycle in &selected {
                let mut members = Vec::with_capacity(cycle.len());
                for &node in &cycle.nodes {
                    let owner = graph.edge(node).owner;
                    matched.insert(&owner.id);
                    claimed.insert(owner.current.name());
                    members.push(owner.clone());
                }
                tier_matched += members.len();
                circles.push(Circle::new(tier, members));
            }

            // A later holder of a claimed slot (possible only under
            // FirstWins) must never get an edge for it in a later tier.
            pool.retain(|p| !matched.contains(&p.id) && !claimed.contains(p.current.name()));

            tracing::debug!(
                tier = %tier,
                nodes = graph.len(),
                candidates = candidate_count,
                circles = selected.len(),
                matched = tier_matched,
                remaining = pool.len(),
                "Tier resolved"
            );
        }

        let unmatched: Vec<Participant> = participants
            .iter()
            .filter(|p| !matched.contains(&p.id))
            .cloned()
            .collect();

        let result = assemble_result(circles, unmatched, self.config.max_tiers);

        if self.config.verify_invariants {
            check_result(participants, &result)?;
        }

        tracing::info!(
            engine = constants::ENGINE_NAME,
            version = constants::VERSION,
            people = result.total_people(),
            matched = result.total_matched(),
            unmatched = result.unmatched_people.len(),
            circles = result.circles.len(),
            match_rate = result.match_rate(),
            fingerprint = %result.fingerprint_hex(),
            "Matching run complete"
        );

        Ok(result)
    }
}

impl MatchingAlgorithm for CircleMatcher {
    fn find_matches(&self, participants: &[Participant]) -> Result<MatchResult> {
        self.run(participants)
    }
}

/// Run the matcher with the default configuration.
pub fn find_circles(participants: &[Participant]) -> Result<MatchResult> {
    CircleMatcher::default().run(participants)
}
