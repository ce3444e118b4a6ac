//! System-wide constants for the Ruilarts matcher.

/// Hard upper bound on ranked preferences per participant.
pub const MAX_PREFERENCE_TIERS: u8 = 5;

/// Number of tiers the matcher cascades through by default
/// (first and second choice).
pub const DEFAULT_MAX_TIERS: u8 = 2;

/// Smallest cycle that can carry a swap. A single participant wanting
/// their own slot is never a swap.
pub const MIN_CYCLE_LENGTH: usize = 2;

/// Domain separator for the match result fingerprint.
pub const FINGERPRINT_DOMAIN: &[u8] = b"ruilarts:match_result:v1:";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "Ruilarts";
