//! Post-conditions every [`MatchResult`] must satisfy.
//!
//! - partition: each input participant is in exactly one circle or in the
//!   unmatched list, and nobody else is
//! - disjointness: no slot appears in two circles
//! - minimality: every circle has at least two members and distinct slots
//! - attribution: each member wants, at their recorded tier, the slot of the
//!   next member, and that tier is the circle's tier
//! - aggregation: `total_people == total_matched + unmatched`

use std::collections::{HashMap, HashSet};

use ruilarts_types::{
    MatchResult, Participant, ParticipantId, Result, RuilartsError, constants,
};

fn violation(reason: String) -> RuilartsError {
    RuilartsError::InvariantViolation { reason }
}

/// Check `result` against the snapshot it was computed from.
pub fn check_result(input: &[Participant], result: &MatchResult) -> Result<()> {
    let mut seen: HashMap<&ParticipantId, usize> = HashMap::with_capacity(input.len());
    let mut slots: HashSet<&str> = HashSet::new();

    for (ci, circle) in result.circles.iter().enumerate() {
        if circle.size != circle.people.len() {
            return Err(violation(format!(
                "circle {ci}: size {} but {} members",
                circle.size,
                circle.people.len()
            )));
        }
        if circle.size < constants::MIN_CYCLE_LENGTH {
            return Err(violation(format!("circle {ci}: fewer than two members")));
        }

        let mut local: HashSet<&str> = HashSet::with_capacity(circle.size);
        for entry in &circle.people {
            let slot = entry.participant.current.name();
            if !local.insert(slot) {
                return Err(violation(format!("circle {ci}: slot {slot} repeats")));
            }
            if !slots.insert(slot) {
                return Err(violation(format!("slot {slot} is used by two circles")));
            }
            if entry.tier != circle.tier {
                return Err(violation(format!(
                    "circle {ci}: {} tagged {} inside a {} circle",
                    entry.participant.id, entry.tier, circle.tier
                )));
            }
            *seen.entry(&entry.participant.id).or_default() += 1;
        }

        if !circle.is_closed() {
            return Err(violation(format!("circle {ci}: swap chain does not close")));
        }
    }

    for p in &result.unmatched_people {
        *seen.entry(&p.id).or_default() += 1;
    }

    for p in input {
        match seen.remove(&p.id) {
            Some(1) => {}
            Some(n) => {
                return Err(violation(format!("{} appears {n} times", p.id)));
            }
            None => return Err(violation(format!("{} was dropped", p.id))),
        }
    }
    if let Some(stray) = seen.keys().next() {
        return Err(violation(format!("{stray} is not part of the input")));
    }

    let stats = &result.statistics;
    if stats.total_people != stats.total_matched + result.unmatched_people.len() {
        return Err(violation(format!(
            "total_people {} != matched {} + unmatched {}",
            stats.total_people,
            stats.total_matched,
            result.unmatched_people.len()
        )));
    }

    Ok(())
}
