//! Shared error types for the crate
//!
//! Every variant here is produced by the guard layer in
//! [`crate::validation`]; the placement core itself is a total function
//! and never fails on contract-valid input.

use thiserror::Error;

/// Main error type for podium operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Roster contains no participants
    #[error("Roster has no participants")]
    EmptyRoster,

    /// Roster exceeds the contract ceiling
    #[error("Roster has {count} participants, contract maximum is 100")]
    RosterTooLarge { count: usize },

    /// Two participants share an identifier
    #[error("Duplicate user identifier: {user_id}")]
    DuplicateUserId { user_id: String },

    /// Scores must be positive integers
    #[error("Score for {user_id} must be a positive integer")]
    ZeroScore { user_id: String },

    /// Two participants earned the same score
    #[error("Tied score {score} between two participants")]
    TiedScores { score: u32 },

    /// Threshold triple is not strictly descending
    #[error("Thresholds must be strictly descending, got {first} / {second} / {third}")]
    ThresholdsNotDescending { first: u32, second: u32, third: u32 },

    /// Third-place minimum must be positive
    #[error("Third-place minimum score must be positive")]
    ZeroThreshold,
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
