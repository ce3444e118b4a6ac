//! Result fingerprints for reproducibility checks.
//!
//! Running the matcher twice on the same snapshot must give the same
//! circles in the same order. The fingerprint is a SHA-256 over exactly
//! what that promise covers, so two results can be compared without
//! walking their payloads.

use ruilarts_types::{Circle, MatchResult, Participant, constants};
use sha2::{Digest, Sha256};

/// Compute the fingerprint over ordered circles and unmatched participants.
///
/// Covers, in order:
/// - number of circles, then per circle: size, tier, member ids and slots
/// - number of unmatched participants, then their ids
#[must_use]
pub fn compute_result_fingerprint(circles: &[Circle], unmatched: &[Participant]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(constants::FINGERPRINT_DOMAIN);
    hasher.update((circles.len() as u64).to_le_bytes());

    for circle in circles {
        hasher.update((circle.size as u64).to_le_bytes());
        hasher.update([circle.tier.0]);
        for entry in &circle.people {
            update_str(&mut hasher, entry.participant.id.as_str());
            update_str(&mut hasher, entry.participant.current.name());
            hasher.update([entry.tier.0]);
        }
    }

    hasher.update((unmatched.len() as u64).to_le_bytes());
    for p in unmatched {
        update_str(&mut hasher, p.id.as_str());
    }

    let result = hasher.finalize();
    let mut root = [0u8; 32];
    root.copy_from_slice(&result);
    root
}

// Length-prefixed so ("ab", "c") and ("a", "bc") hash differently.
fn update_str(hasher: &mut Sha256, s: &str) {
    hasher.update((s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

/// Recompute the fingerprint and compare with the stored one.
#[must_use]
pub fn verify_fingerprint(result: &MatchResult) -> bool {
    compute_result_fingerprint(&result.circles, &result.unmatched_people) == result.fingerprint
}
