//! Matching service: provider -> matcher -> cache -> sink.
//!
//! The service is the only place that talks to collaborators. It fetches a
//! snapshot before a run, hands the immutable snapshot to the matcher, and
//! stores the result in its own [`ResultCache`]. Failures from the provider
//! or a sink are reported as boundary errors and never mixed up with
//! matching outcomes.

use std::sync::Arc;

use ruilarts_matchcore::CircleMatcher;
use ruilarts_types::{
    MatchResult, MatchStatistics, MatchingAlgorithm, Participant, ParticipantId,
    ParticipantProvider, Result, ResultSink, RuilartsError, Slot,
};

use crate::cache::ResultCache;
use crate::registry::InMemoryRegistry;

/// Wires a participant source to a matching algorithm with an explicit cache.
pub struct MatchingService<P, A = CircleMatcher> {
    provider: P,
    algorithm: A,
    cache: ResultCache,
    /// Bumped by [`MatchingService::invalidate`]. Keys the cache for
    /// providers that report no generation of their own.
    epoch: u64,
}

impl<P, A> MatchingService<P, A>
where
    P: ParticipantProvider,
    A: MatchingAlgorithm,
{
    #[must_use]
    pub fn new(provider: P, algorithm: A) -> Self {
        Self {
            provider,
            algorithm,
            cache: ResultCache::new(),
            epoch: 0,
        }
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mark the cached result stale. Call this whenever the provider's data
    /// changes in a way its generation does not reflect.
    pub fn invalidate(&mut self) {
        self.epoch += 1;
        self.cache.invalidate();
    }

    /// The generation a result computed now belongs to: the provider's own
    /// counter when it keeps one, the service epoch otherwise.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.provider.generation().unwrap_or(self.epoch)
    }

    /// Fetch a fresh snapshot and run the matcher, or serve the cached
    /// result when `use_cache` is set and nothing changed since.
    ///
    /// # Errors
    /// - [`RuilartsError::DataUnavailable`] if the provider fails
    /// - any matching error from the algorithm
    pub fn find_matches(&mut self, use_cache: bool) -> Result<Arc<MatchResult>> {
        let generation = self.generation();
        if use_cache {
            if let Some(hit) = self.cache.get(generation) {
                tracing::debug!(generation, "Serving cached match result");
                return Ok(hit);
            }
        }

        let snapshot = self.provider.fetch_all().map_err(as_data_unavailable)?;
        tracing::debug!(
            generation,
            participants = snapshot.len(),
            "Snapshot fetched"
        );

        let result = self.algorithm.find_matches(&snapshot)?;
        Ok(self.cache.store(generation, result))
    }

    /// The most recent result, if one is cached and still current.
    #[must_use]
    pub fn cached_matches(&self) -> Option<Arc<MatchResult>> {
        self.cache.get(self.generation())
    }

    /// Statistics of the current cached result.
    #[must_use]
    pub fn statistics(&self) -> Option<MatchStatistics> {
        self.cached_matches().map(|r| r.statistics.clone())
    }

    /// Publish the current result (computing it if needed) to `sink`.
    ///
    /// # Errors
    /// [`RuilartsError::PersistenceFailure`] if the sink fails.
    pub fn publish<S: ResultSink>(&mut self, sink: &mut S) -> Result<Arc<MatchResult>> {
        let result = self.find_matches(true)?;
        sink.publish(&result).map_err(as_persistence_failure)?;
        Ok(result)
    }
}

// Registry mutations bump the registry generation, which retires any
// cached result on its own.
impl<A: MatchingAlgorithm> MatchingService<InMemoryRegistry, A> {
    pub fn add_participant(&mut self, participant: Participant) -> Result<()> {
        self.provider.add(participant)
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        current: Slot,
        desired: Vec<Slot>,
    ) -> Result<ParticipantId> {
        self.provider.register(name, current, desired)
    }

    pub fn remove_participant(&mut self, id: &ParticipantId) -> Result<Participant> {
        self.provider.remove(id)
    }

    #[must_use]
    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.provider.get(id)
    }
}

impl MatchingService<InMemoryRegistry, CircleMatcher> {
    /// An empty in-memory registry with the default matcher.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(InMemoryRegistry::new(), CircleMatcher::default())
    }
}

fn as_data_unavailable(err: RuilartsError) -> RuilartsError {
    if err.is_collaborator_failure() {
        err
    } else {
        RuilartsError::DataUnavailable {
            reason: err.to_string(),
        }
    }
}

fn as_persistence_failure(err: RuilartsError) -> RuilartsError {
    if err.is_collaborator_failure() {
        err
    } else {
        RuilartsError::PersistenceFailure {
            reason: err.to_string(),
        }
    }
}
