//! In-memory result sink.

use ruilarts_types::{MatchResult, Result, ResultSink};

/// Keeps every published result, oldest first.
#[derive(Debug, Default, Clone)]
pub struct InMemorySink {
    published: Vec<MatchResult>,
}

impl InMemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn published(&self) -> &[MatchResult] {
        &self.published
    }

    #[must_use]
    pub fn latest(&self) -> Option<&MatchResult> {
        self.published.last()
    }
}

impl ResultSink for InMemorySink {
    fn publish(&mut self, result: &MatchResult) -> Result<()> {
        tracing::debug!(
            circles = result.circles.len(),
            fingerprint = %result.fingerprint_hex(),
            "Result published"
        );
        self.published.push(result.clone());
        Ok(())
    }
}
