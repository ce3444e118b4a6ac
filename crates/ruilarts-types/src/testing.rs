//! Test helpers: terse participant constructors and random snapshots.

use rand::Rng;
use rand::seq::index;

use crate::{Participant, Slot};

fn slot_name(i: usize) -> String {
    format!("S{i:05}")
}

impl Participant {
    /// Participant `id` holding slot `current` and wanting `desired` in
    /// rank order. The display name is the id upper-cased.
    pub fn dummy(id: &str, current: &str, desired: &[&str]) -> Self {
        Self::new(
            id,
            id.to_uppercase(),
            Slot::new(current, ""),
            desired.iter().map(|d| Slot::new(*d, "")).collect(),
        )
    }
}

/// `n` participants with distinct current slots whose preferences at every
/// tier only ever point at slots of later participants or at slots nobody
/// holds. No tier graph built from this snapshot contains a cycle.
pub fn random_acyclic_snapshot<R: Rng>(rng: &mut R, n: usize, tiers: usize) -> Vec<Participant> {
    (0..n)
        .map(|i| {
            let desired = (0..tiers)
                .map(|_| {
                    if i + 1 < n && rng.gen_bool(0.7) {
                        slot_name(rng.gen_range(i + 1..n))
                    } else {
                        format!("VACANT-{}", rng.gen_range(0..n.max(1)))
                    }
                })
                .collect::<Vec<_>>();
            let refs: Vec<&str> = desired.iter().map(String::as_str).collect();
            Participant::dummy(&format!("p{i}"), &slot_name(i), &refs)
        })
        .collect()
}

/// `n` participants with distinct current slots, each ranking `tiers`
/// distinct slots held by other participants.
pub fn random_snapshot<R: Rng>(rng: &mut R, n: usize, tiers: usize) -> Vec<Participant> {
    let names: Vec<String> = (0..n).map(slot_name).collect();
    (0..n)
        .map(|i| {
            let others = n.saturating_sub(1);
            let desired: Vec<&str> = index::sample(rng, others, tiers.min(others))
                .into_iter()
                .map(|j| if j >= i { j + 1 } else { j })
                .map(|j| names[j].as_str())
                .collect();
            Participant::dummy(&format!("p{i}"), &names[i], &desired)
        })
        .collect()
}
