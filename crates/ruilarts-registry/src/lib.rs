//! # ruilarts-registry
//!
//! **Caller side of the matcher**: where snapshots come from and where
//! results go.
//!
//! ## Architecture
//!
//! The matcher never performs I/O. This crate owns everything around it:
//! 1. **InMemoryRegistry**: validated participant store, a [`ParticipantProvider`]
//! 2. **ResultCache**: caller-owned cache of the last result, keyed by generation
//! 3. **InMemorySink**: a [`ResultSink`] that keeps every published result
//! 4. **MatchingService**: fetch snapshot -> run matcher -> cache -> publish
//!
//! ## Flow
//!
//! ```text
//! Provider.fetch_all() ─► MatchingAlgorithm.find_matches() ─► ResultCache
//!                                                               │
//!                                                 ResultSink.publish()
//! ```
//!
//! [`ParticipantProvider`]: ruilarts_types::ParticipantProvider
//! [`ResultSink`]: ruilarts_types::ResultSink

pub mod cache;
pub mod registry;
pub mod service;
pub mod sink;

pub use cache::{CachedResult, ResultCache};
pub use registry::InMemoryRegistry;
pub use service::MatchingService;
pub use sink::InMemorySink;
