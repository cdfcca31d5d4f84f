//! # Error Types
//!
//! Validation errors raised while building the catalog, the user set or
//! the service. Computations themselves never fail.

use crate::{Amount, TierId, UserId};
use thiserror::Error;

/// Errors produced by the fundraising core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A reward tier with a non-positive threshold.
    #[error("invalid reward tier {id}: threshold must be positive, got {threshold}")]
    InvalidTier { id: TierId, threshold: Amount },

    /// Two tiers share the same id.
    #[error("duplicate reward tier id {0}")]
    DuplicateTier(TierId),

    /// Two users share an id, email or referral code.
    #[error("duplicate user {id}: {field} already in use")]
    DuplicateUser { id: UserId, field: &'static str },

    /// Data supplied for a user that is not loaded.
    #[error("unknown user {0}")]
    UnknownUser(UserId),

    /// The monthly goal must be a positive amount.
    #[error("monthly goal must be positive")]
    InvalidGoal,
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
