//! Caller-owned cache of the most recent match result.
//!
//! There is no global cache: whoever owns a [`ResultCache`] decides when it
//! goes stale. A cached result is only handed out for the exact generation
//! it was computed against.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use ruilarts_types::MatchResult;

/// A result together with the generation it belongs to.
#[derive(Debug, Clone)]
pub struct CachedResult {
    pub generation: u64,
    pub result: Arc<MatchResult>,
    pub computed_at: DateTime<Utc>,
}

/// Holds at most one result.
#[derive(Debug, Default, Clone)]
pub struct ResultCache {
    entry: Option<CachedResult>,
}

impl ResultCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached result, if it was computed for `generation`.
    #[must_use]
    pub fn get(&self, generation: u64) -> Option<Arc<MatchResult>> {
        self.entry
            .as_ref()
            .filter(|e| e.generation == generation)
            .map(|e| Arc::clone(&e.result))
    }

    /// The last stored entry regardless of generation.
    #[must_use]
    pub fn latest(&self) -> Option<&CachedResult> {
        self.entry.as_ref()
    }

    /// Replace the cached entry.
    pub fn store(&mut self, generation: u64, result: MatchResult) -> Arc<MatchResult> {
        let result = Arc::new(result);
        self.entry = Some(CachedResult {
            generation,
            result: Arc::clone(&result),
            computed_at: Utc::now(),
        });
        result
    }

    pub fn invalidate(&mut self) {
        if self.entry.take().is_some() {
            tracing::debug!("Cached match result invalidated");
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}
