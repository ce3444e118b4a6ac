//! # ruilarts-types
//!
//! Shared types, errors, and configuration for the **Ruilarts** circular
//! swap matcher.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ParticipantId`]
//! - **Slot model**: [`Slot`]
//! - **Participant model**: [`Participant`], [`Tier`]
//! - **Circle model**: [`Circle`], [`MatchEntry`]
//! - **Result model**: [`MatchResult`], [`MatchStatistics`], [`TierStatistics`]
//! - **Configuration**: [`MatcherConfig`], [`SlotConflictPolicy`]
//! - **Collaborators**: [`ParticipantProvider`], [`ResultSink`], [`MatchingAlgorithm`]
//! - **Errors**: [`RuilartsError`] with `RA_ERR_` prefix codes
//! - **Constants**: system-wide limits and defaults

pub mod circle;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod interfaces;
pub mod participant;
pub mod result;
pub mod slot;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

// Re-export all primary types at crate root for ergonomic imports:
//   use ruilarts_types::{Participant, Slot, Tier, MatchResult, ...};

pub use circle::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use interfaces::*;
pub use participant::*;
pub use result::*;
pub use slot::*;

// Constants are accessed via `ruilarts_types::constants::FOO`
// (not re-exported to avoid name collisions).
