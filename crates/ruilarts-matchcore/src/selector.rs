//! Greedy disjoint selection of candidate cycles.
//!
//! Candidates are ordered by length, then by their smallest slot name. A candidate is accepted
//! iff none of its slots was claimed by an earlier acceptance.
//!
//! This is first-fit on the cycle conflict hypergraph, not an optimal
//! packing. Cycles from a single functional graph are already disjoint,
//! so there the selector only fixes the order; the conflict check matters
//! for candidate sets assembled from elsewhere.

use crate::cycles::CandidateCycle;
use crate::graph::TierGraph;

/// Pick a pairwise slot-disjoint subset of `candidates`, smallest first.
#[must_use]
pub fn select_disjoint(
    graph: &TierGraph<'_>,
    mut candidates: Vec<CandidateCycle>,
) -> Vec<CandidateCycle> {
    candidates.sort_by_cached_key(|c| (c.len(), c.anchor(graph)));

    let mut claimed = vec![false; graph.len()];
    let mut selected = Vec::new();
    let mut rejected = 0usize;

    for candidate in candidates {
        if candidate.nodes.iter().any(|&n| claimed[n]) {
            rejected += 1;
            continue;
        }
        for &n in &candidate.nodes {
            claimed[n] = true;
        }
        selected.push(candidate);
    }

    tracing::debug!(
        tier = %graph.tier(),
        selected = selected.len(),
        rejected,
        "Disjoint selection complete"
    );

    selected
}
