//! Error types for the Ruilarts matcher.
//!
//! All errors use the `RA_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Participant data errors
//! - 2xx: Matching errors
//! - 3xx: Collaborator boundary errors (storage, persistence)
//! - 9xx: General / internal errors

use thiserror::Error;

use crate::ParticipantId;

/// Central error enum for all Ruilarts operations.
#[derive(Debug, Error)]
pub enum RuilartsError {
    // =================================================================
    // Participant Errors (1xx)
    // =================================================================
    /// The participant failed intake validation.
    #[error("RA_ERR_100: Invalid participant: {reason}")]
    InvalidParticipant { reason: String },

    /// A participant with this id already exists (or appears twice in a snapshot).
    #[error("RA_ERR_101: Duplicate participant: {0}")]
    DuplicateParticipant(ParticipantId),

    /// The requested participant is not registered.
    #[error("RA_ERR_102: Participant not found: {0}")]
    ParticipantNotFound(ParticipantId),

    // =================================================================
    // Matching Errors (2xx)
    // =================================================================
    /// Two participants claim to currently hold the same slot.
    #[error("RA_ERR_200: Conflicting slot ownership: {slot} held by both {first} and {second}")]
    ConflictingSlotOwnership {
        slot: String,
        first: ParticipantId,
        second: ParticipantId,
    },

    /// A produced result broke one of the result invariants.
    #[error("RA_ERR_201: Invariant violation: {reason}")]
    InvariantViolation { reason: String },

    // =================================================================
    // Collaborator Errors (3xx)
    // =================================================================
    /// The participant snapshot could not be fetched.
    #[error("RA_ERR_300: Participant data unavailable: {reason}")]
    DataUnavailable { reason: String },

    /// A result could not be persisted or published.
    #[error("RA_ERR_301: Persistence failure: {reason}")]
    PersistenceFailure { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("RA_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Serialization / deserialization error.
    #[error("RA_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (out-of-range limits, bad policy, etc.).
    #[error("RA_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

impl RuilartsError {
    /// Whether this error originates outside the matcher (storage, sinks).
    #[must_use]
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(
            self,
            Self::DataUnavailable { .. } | Self::PersistenceFailure { .. }
        )
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, RuilartsError>;

impl From<serde_json::Error> for RuilartsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
