//! Capability traits at the engine boundary.
//!
//! The matcher never calls a provider or sink itself: callers fetch a
//! snapshot, run the matcher, and hand the result on.

use crate::{MatchResult, Participant, Result};

/// Source of the participant snapshot for a run.
pub trait ParticipantProvider {
    /// Fetch every participant, in a stable order.
    ///
    /// Failures must be reported as [`crate::RuilartsError::DataUnavailable`].
    fn fetch_all(&self) -> Result<Vec<Participant>>;

    /// Change counter of the backing data, if the provider keeps one.
    /// `None` means staleness is only known through explicit invalidation.
    fn generation(&self) -> Option<u64> {
        None
    }
}

/// Destination for finished results.
pub trait ResultSink {
    /// Failures must be reported as [`crate::RuilartsError::PersistenceFailure`].
    fn publish(&mut self, result: &MatchResult) -> Result<()>;
}

/// A matching strategy over an already-fetched snapshot.
pub trait MatchingAlgorithm {
    fn find_matches(&self, participants: &[Participant]) -> Result<MatchResult>;
}
