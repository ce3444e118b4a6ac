//! # ruilarts-matchcore
//!
//! **Pure deterministic circular swap matcher.**
//!
//! MatchCore takes an already-fetched snapshot of participants and returns
//! the swap circles it can close, tier by tier. It has:
//!
//! - **Zero side effects**: no storage, no network, no global state
//! - **Deterministic output**: same snapshot -> same circles, same order
//! - **Linear cycle search**: one walk per tier over a functional graph
//! - **Smallest-first selection**: fewer people per circle, fewer ways to fail
//!
//! ```text
//! snapshot ─► graph(tier) ─► cycles ─► disjoint selection ─┐
//!    ▲                                                     │
//!    └──────────── unmatched remainder, next tier ◄────────┘
//!                                   │
//!                                   ▼
//!                        aggregate ─► MatchResult
//! ```

pub mod aggregate;
pub mod cycles;
pub mod determinism;
pub mod graph;
pub mod invariants;
pub mod resolver;
pub mod selector;

pub use aggregate::{assemble_result, compute_statistics};
pub use cycles::{CandidateCycle, enumerate_cycles};
pub use determinism::{compute_result_fingerprint, verify_fingerprint};
pub use graph::{PreferenceEdge, TierGraph, build_tier_graph};
pub use invariants::check_result;
pub use resolver::{CircleMatcher, find_circles};
pub use selector::select_disjoint;
