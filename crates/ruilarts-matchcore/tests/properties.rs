//! Integration test: result invariants over random snapshots.
//!
//! Every run must partition the input, keep circles slot-disjoint and
//! closed, attribute tiers monotonically, and be reproducible.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use ruilarts_matchcore::{CircleMatcher, check_result, find_circles, verify_fingerprint};
use ruilarts_types::testing::random_snapshot;
use ruilarts_types::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn snapshots() -> impl Iterator<Item = Vec<Participant>> {
    (0..40u8).map(|seed| {
        let mut rng = StdRng::seed_from_u64(u64::from(seed));
        let n = 2 + (usize::from(seed) * 7) % 60;
        random_snapshot(&mut rng, n, 2)
    })
}

#[test]
fn every_participant_lands_exactly_once() {
    init_tracing();
    for people in snapshots() {
        let result = find_circles(&people).unwrap();
        check_result(&people, &result).unwrap();

        let mut seen = HashSet::new();
        for c in &result.circles {
            for e in &c.people {
                assert!(seen.insert(e.participant.id.clone()));
            }
        }
        for p in &result.unmatched_people {
            assert!(seen.insert(p.id.clone()));
        }
        assert_eq!(seen.len(), people.len());
    }
}

#[test]
fn circles_never_share_slots() {
    for people in snapshots() {
        let result = find_circles(&people).unwrap();
        let mut slots = HashSet::new();
        for c in &result.circles {
            assert!(c.size >= 2);
            for slot in c.slots() {
                assert!(slots.insert(slot.name.clone()), "slot {} reused", slot.name);
            }
        }
    }
}

#[test]
fn tiers_are_attributed_in_cascade_order() {
    for people in snapshots() {
        let result = find_circles(&people).unwrap();
        let tiers: Vec<Tier> = result.circles.iter().map(|c| c.tier).collect();
        let mut sorted = tiers.clone();
        sorted.sort();
        assert_eq!(tiers, sorted, "circles are emitted tier by tier");

        for c in &result.circles {
            assert!(c.is_closed());
            assert!(c.is_single_tier(c.tier));
        }
    }
}

#[test]
fn sizes_are_non_decreasing_within_a_tier() {
    for people in snapshots() {
        let result = find_circles(&people).unwrap();
        for pair in result.circles.windows(2) {
            if pair[0].tier == pair[1].tier {
                assert!(pair[0].size <= pair[1].size);
            }
        }
    }
}

#[test]
fn identical_snapshots_give_identical_results() {
    for people in snapshots() {
        let first = find_circles(&people).unwrap();
        let second = find_circles(&people).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.fingerprint, second.fingerprint);
        assert!(verify_fingerprint(&first));
    }
}

#[test]
fn aggregation_identity() {
    for people in snapshots() {
        let result = find_circles(&people).unwrap();
        let s = &result.statistics;
        assert_eq!(s.total_people, s.total_matched + result.unmatched_people.len());
        assert_eq!(s.total_matched, s.circle_sizes.iter().sum::<usize>());
        assert_eq!(
            s.total_matched,
            s.tiers.iter().map(|t| t.matched).sum::<usize>()
        );
        assert_eq!(s.number_of_circles, result.circles.len());
    }
}

#[test]
fn cycle_bound_is_respected() {
    let matcher = CircleMatcher::new(MatcherConfig::default().with_max_cycle_length(3)).unwrap();
    for people in snapshots() {
        let result = matcher.run(&people).unwrap();
        assert!(result.circles.iter().all(|c| c.size <= 3));
    }
}

#[test]
fn result_serializes_to_json() {
    let mut rng = StdRng::seed_from_u64(9);
    let people = random_snapshot(&mut rng, 25, 2);
    let result = find_circles(&people).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["statistics"]["total_people"], 25);
    assert!(json["circles"].is_array());
}

#[test]
fn later_tier_members_were_unmatched_by_earlier_tiers() {
    let first_only = CircleMatcher::new(MatcherConfig::default().with_max_tiers(1)).unwrap();
    for people in snapshots() {
        let full = find_circles(&people).unwrap();
        let truncated = first_only.run(&people).unwrap();
        for c in full.circles.iter().filter(|c| c.tier == Tier::SECOND) {
            for e in &c.people {
                assert!(truncated.is_unmatched(&e.participant.id));
            }
        }
        // The first tier is unaffected by whether a second one follows.
        let full_first: Vec<&Circle> =
            full.circles.iter().filter(|c| c.tier == Tier::FIRST).collect();
        let truncated_first: Vec<&Circle> = truncated.circles.iter().collect();
        assert_eq!(full_first, truncated_first);
    }
}
