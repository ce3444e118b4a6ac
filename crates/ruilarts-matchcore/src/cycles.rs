//! Cycle enumeration over a functional tier graph.
//!
//! Every node has at most one successor, so following successors from any
//! start either falls off a dead end, runs into a node finished by an
//! earlier walk, or returns to a node on the current path. Only the last
//! case is a cycle, and each cycle is reported exactly once no matter which
//! of its nodes a walk happened to enter through.
//!
//! Nodes are marked finished after each walk, so the total work across all
//! starts is O(n).

use ruilarts_types::MatcherConfig;

use crate::graph::TierGraph;

/// A cycle found in one tier graph, as node indices in swap order.
///
/// The sequence is rotated to start at the node with the smallest slot
/// name, so one cycle has exactly one representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateCycle {
    pub nodes: Vec<usize>,
}

impl CandidateCycle {
    /// Rotate `nodes` so the smallest slot name comes first.
    #[must_use]
    pub fn canonical(graph: &TierGraph<'_>, mut nodes: Vec<usize>) -> Self {
        if let Some(start) = nodes
            .iter()
            .enumerate()
            .min_by_key(|(_, n)| graph.slot_name(**n))
            .map(|(i, _)| i)
        {
            nodes.rotate_left(start);
        }
        Self { nodes }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Lexicographically smallest slot name on the cycle.
    #[must_use]
    pub fn anchor<'a>(&self, graph: &TierGraph<'a>) -> &'a str {
        self.nodes
            .iter()
            .map(|n| graph.slot_name(*n))
            .min()
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unseen,
    /// On the current walk, at this path position.
    OnPath(usize),
    Finished,
}

/// Find every cycle in `graph`, in discovery order.
///
/// Cycles longer than `config.max_cycle_length` are dropped.
#[must_use]
pub fn enumerate_cycles(graph: &TierGraph<'_>, config: &MatcherConfig) -> Vec<CandidateCycle> {
    let mut marks = vec![Mark::Unseen; graph.len()];
    let mut cycles = Vec::new();
    let mut path: Vec<usize> = Vec::new();
    let mut dropped = 0usize;

    for start in 0..graph.len() {
        if marks[start] != Mark::Unseen {
            continue;
        }

        path.clear();
        let mut cursor = Some(start);
        while let Some(node) = cursor {
            match marks[node] {
                Mark::Unseen => {
                    marks[node] = Mark::OnPath(path.len());
                    path.push(node);
                    cursor = graph.successor(node);
                }
                Mark::OnPath(pos) => {
                    let found = &path[pos..];
                    if config.admits_cycle_length(found.len()) {
                        cycles.push(CandidateCycle::canonical(graph, found.to_vec()));
                    } else {
                        dropped += 1;
                    }
                    cursor = None;
                }
                Mark::Finished => cursor = None,
            }
        }

        for &node in &path {
            marks[node] = Mark::Finished;
        }
    }

    if dropped > 0 {
        tracing::warn!(
            tier = %graph.tier(),
            dropped,
            max_cycle_length = ?config.max_cycle_length,
            "Cycles above the length bound discarded"
        );
    }

    cycles
}

#[cfg(test)]
mod tests {
    use ruilarts_types::{Participant, SlotConflictPolicy, Tier};

    use super::*;
    use crate::graph::build_tier_graph;

    fn graph(people: &[Participant]) -> TierGraph<'_> {
        build_tier_graph(people, Tier::FIRST, SlotConflictPolicy::Reject).unwrap()
    }

    fn slot_names(g: &TierGraph<'_>, c: &CandidateCycle) -> Vec<String> {
        c.nodes.iter().map(|n| g.slot_name(*n).to_string()).collect()
    }

    #[test]
    fn empty_graph_has_no_cycles() {
        let people: Vec<Participant> = vec![];
        assert!(enumerate_cycles(&graph(&people), &MatcherConfig::default()).is_empty());
    }

    #[test]
    fn two_cycle() {
        let people = vec![
            Participant::dummy("a", "X", &["Y"]),
            Participant::dummy("b", "Y", &["X"]),
        ];
        let g = graph(&people);
        let cycles = enumerate_cycles(&g, &MatcherConfig::default());
        assert_eq!(cycles.len(), 1);
        assert_eq!(slot_names(&g, &cycles[0]), vec!["X", "Y"]);
    }

    #[test]
    fn rotation_starts_at_smallest_slot() {
        let people = vec![
            Participant::dummy("c", "C", &["A"]),
            Participant::dummy("a", "A", &["B"]),
            Participant::dummy("b", "B", &["C"]),
        ];
        let g = graph(&people);
        let cycles = enumerate_cycles(&g, &MatcherConfig::default());
        assert_eq!(cycles.len(), 1, "rotations must not be reported twice");
        assert_eq!(slot_names(&g, &cycles[0]), vec!["A", "B", "C"]);
        assert_eq!(cycles[0].anchor(&g), "A");
    }

    #[test]
    fn dead_end_chain_is_not_a_cycle() {
        let people = vec![
            Participant::dummy("a", "X", &["Y"]),
            Participant::dummy("b", "Y", &["Z"]),
            Participant::dummy("c", "Z", &["W"]),
        ];
        assert!(enumerate_cycles(&graph(&people), &MatcherConfig::default()).is_empty());
    }

    #[test]
    fn tail_leading_into_cycle_is_excluded() {
        // T -> A -> B -> A: T is on a path into the cycle, not on it.
        let people = vec![
            Participant::dummy("t", "T", &["A"]),
            Participant::dummy("a", "A", &["B"]),
            Participant::dummy("b", "B", &["A"]),
        ];
        let g = graph(&people);
        let cycles = enumerate_cycles(&g, &MatcherConfig::default());
        assert_eq!(cycles.len(), 1);
        assert_eq!(slot_names(&g, &cycles[0]), vec!["A", "B"]);
    }

    #[test]
    fn independent_cycles_all_found() {
        let people = vec![
            Participant::dummy("a", "A", &["B"]),
            Participant::dummy("b", "B", &["A"]),
            Participant::dummy("c", "C", &["D"]),
            Participant::dummy("d", "D", &["E"]),
            Participant::dummy("e", "E", &["C"]),
        ];
        let cycles = enumerate_cycles(&graph(&people), &MatcherConfig::default());
        let mut sizes: Vec<usize> = cycles.iter().map(CandidateCycle::len).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![2, 3]);
    }

    #[test]
    fn length_bound_discards_long_cycles() {
        let people = vec![
            Participant::dummy("a", "A", &["B"]),
            Participant::dummy("b", "B", &["C"]),
            Participant::dummy("c", "C", &["A"]),
            Participant::dummy("x", "X", &["Y"]),
            Participant::dummy("y", "Y", &["X"]),
        ];
        let g = graph(&people);
        let cfg = MatcherConfig::default().with_max_cycle_length(2);
        let cycles = enumerate_cycles(&g, &cfg);
        assert_eq!(cycles.len(), 1);
        assert_eq!(slot_names(&g, &cycles[0]), vec!["X", "Y"]);
    }

    #[test]
    fn long_ring_is_found_without_recursion() {
        let n = 50_000;
        let names: Vec<String> = (0..n).map(|i| format!("S{i:06}")).collect();
        let people: Vec<Participant> = (0..n)
            .map(|i| Participant::dummy(&format!("p{i}"), &names[i], &[names[(i + 1) % n].as_str()]))
            .collect();
        let cycles = enumerate_cycles(&graph(&people), &MatcherConfig::default());
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].len(), n);
    }
}
