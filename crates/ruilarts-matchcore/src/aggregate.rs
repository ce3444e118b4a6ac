//! Result aggregation: derived statistics and the final [`MatchResult`].
//!
//! Pure functions over the selected circles and the unmatched remainder.
//! Nothing here mutates its inputs.

use ruilarts_types::{
    Circle, MatchResult, MatchStatistics, Participant, Tier, TierStatistics,
};

use crate::determinism::compute_result_fingerprint;

#[allow(clippy::cast_precision_loss)]
fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[usize]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<usize>() as f64 / values.len() as f64
    }
}

/// Statistics for a run that cascaded through tiers `1..=tiers`.
///
/// Tiers the run never reached (because nobody was left) still get an
/// entry with zero counts. A circle tagged with a tier above `tiers`
/// extends the list.
#[must_use]
pub fn compute_statistics(circles: &[Circle], unmatched: &[Participant], tiers: u8) -> MatchStatistics {
    let circle_sizes: Vec<usize> = circles.iter().map(|c| c.size).collect();
    let total_matched: usize = circle_sizes.iter().sum();
    let total_unmatched = unmatched.len();
    let total_people = total_matched + total_unmatched;

    let highest = circles.iter().map(|c| c.tier.0).max().unwrap_or(0).max(tiers);
    let tiers = Tier::up_to(highest)
        .map(|tier| {
            let matched = circles
                .iter()
                .flat_map(|c| c.people.iter())
                .filter(|e| e.tier == tier)
                .count();
            TierStatistics {
                tier,
                matched,
                circles: circles.iter().filter(|c| c.tier == tier).count(),
                match_rate: percentage(matched, total_people),
            }
        })
        .collect();

    MatchStatistics {
        total_people,
        total_matched,
        total_unmatched,
        match_rate: percentage(total_matched, total_people),
        number_of_circles: circles.len(),
        average_circle_size: mean(&circle_sizes),
        circle_sizes,
        tiers,
    }
}

/// Freeze circles and the unmatched remainder into a [`MatchResult`].
#[must_use]
pub fn assemble_result(circles: Vec<Circle>, unmatched: Vec<Participant>, tiers: u8) -> MatchResult {
    let statistics = compute_statistics(&circles, &unmatched, tiers);
    let fingerprint = compute_result_fingerprint(&circles, &unmatched);
    MatchResult {
        circles,
        unmatched_people: unmatched,
        statistics,
        fingerprint,
    }
}
