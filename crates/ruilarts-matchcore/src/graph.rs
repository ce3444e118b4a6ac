//! Per-tier preference graph.
//!
//! Each node is a slot currently held by a participant; its single outgoing
//! edge points at the slot that participant wants at the given tier. With
//! out-degree at most one the graph is functional, which is what lets the
//! enumerator find every cycle in a single linear pass.
//!
//! Participants without a preference at the tier, and participants whose
//! preference is the slot they already hold, contribute no node.

use std::collections::HashMap;

use ruilarts_types::{Participant, Result, RuilartsError, Slot, SlotConflictPolicy, Tier};

/// `current(owner) -> desired_at(owner, tier)`.
#[derive(Debug, Clone, Copy)]
pub struct PreferenceEdge<'a> {
    pub owner: &'a Participant,
    pub from: &'a Slot,
    pub to: &'a Slot,
}

/// Slot-keyed graph for one preference tier.
///
/// Nodes keep the order in which their owners were supplied, so walks over
/// the graph are reproducible.
#[derive(Debug, Clone)]
pub struct TierGraph<'a> {
    tier: Tier,
    edges: Vec<PreferenceEdge<'a>>,
    index: HashMap<&'a str, usize>,
}

impl<'a> TierGraph<'a> {
    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[must_use]
    pub fn edge(&self, node: usize) -> &PreferenceEdge<'a> {
        &self.edges[node]
    }

    pub fn edges(&self) -> impl Iterator<Item = &PreferenceEdge<'a>> {
        self.edges.iter()
    }

    /// Node index of the edge leaving `slot`, if the slot has one.
    #[must_use]
    pub fn node_of(&self, slot: &str) -> Option<usize> {
        self.index.get(slot).copied()
    }

    /// Follow the edge out of `node` to the node of the desired slot.
    /// `None` when the desired slot has no outgoing edge (dead end).
    #[must_use]
    pub fn successor(&self, node: usize) -> Option<usize> {
        self.node_of(self.edges[node].to.name())
    }

    #[must_use]
    pub fn slot_name(&self, node: usize) -> &'a str {
        self.edges[node].from.name()
    }
}

/// Build the graph for `tier` in one pass over `participants`.
///
/// Every supplied participant takes part in the ownership check, including
/// those that end up without an edge: under [`SlotConflictPolicy::Reject`]
/// two holders of one slot fail the build, under
/// [`SlotConflictPolicy::FirstWins`] the later holder is dropped.
pub fn build_tier_graph<'a, I>(
    participants: I,
    tier: Tier,
    policy: SlotConflictPolicy,
) -> Result<TierGraph<'a>>
where
    I: IntoIterator<Item = &'a Participant>,
{
    let mut owners: HashMap<&'a str, &'a Participant> = HashMap::new();
    let mut edges = Vec::new();
    let mut index = HashMap::new();

    for p in participants {
        let slot = p.current.name();
        if let Some(first) = owners.get(slot) {
            match policy {
                SlotConflictPolicy::Reject => {
                    return Err(RuilartsError::ConflictingSlotOwnership {
                        slot: slot.to_string(),
                        first: first.id.clone(),
                        second: p.id.clone(),
                    });
                }
                SlotConflictPolicy::FirstWins => {
                    tracing::warn!(
                        tier = %tier,
                        slot,
                        owner = %first.id,
                        dropped = %p.id,
                        "Duplicate slot holder dropped"
                    );
                    continue;
                }
            }
        }
        owners.insert(slot, p);

        let Some(to) = p.desired_at(tier) else {
            continue;
        };
        if to == &p.current {
            continue;
        }
        index.insert(slot, edges.len());
        edges.push(PreferenceEdge {
            owner: p,
            from: &p.current,
            to,
        });
    }

    Ok(TierGraph { tier, edges, index })
}
