//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::EntityId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Member not found: {0}")]
    MemberNotFound(EntityId),

    #[error("Board not found: {0}")]
    BoardNotFound(EntityId),

    #[error("League not found: {0}")]
    LeagueNotFound(EntityId),

    #[error("Channel does not exist: {0}")]
    NotExistChannel(String),

    #[error("Mentioned league does not exist")]
    NotExistLeague,

    #[error("Like does not exist")]
    NotExistLike,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Member is not allocated to the board's league")]
    NotAllocatedLeague,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Like already exists")]
    LikeAlreadyExists,

    // =========================================================================
    // Consistency Violations
    // =========================================================================
    #[error("Like was not recorded after insert")]
    FailToCreateLike,

    #[error("Like is still recorded after delete")]
    FailToDeleteLike,

    // =========================================================================
    // Transient Errors
    // =========================================================================
    #[error("Timed out acquiring lock: {key}")]
    LockTimeout { key: String },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::BoardNotFound(_) => "UNKNOWN_BOARD",
            Self::LeagueNotFound(_) => "UNKNOWN_LEAGUE",
            Self::NotExistChannel(_) => "NOT_EXIST_CHANNEL",
            Self::NotExistLeague => "NOT_EXIST_LEAGUE",
            Self::NotExistLike => "NOT_EXIST_LIKE",

            // Authorization
            Self::NotAllocatedLeague => "NOT_ALLOCATED_LEAGUE",

            // Conflict
            Self::LikeAlreadyExists => "LIKE_ALREADY_EXISTS",

            // Consistency
            Self::FailToCreateLike => "FAIL_TO_CREATE_LIKE",
            Self::FailToDeleteLike => "FAIL_TO_DELETE_LIKE",

            // Transient
            Self::LockTimeout { .. } => "LOCK_TIMEOUT",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MemberNotFound(_)
                | Self::BoardNotFound(_)
                | Self::LeagueNotFound(_)
                | Self::NotExistChannel(_)
                | Self::NotExistLeague
                | Self::NotExistLike
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotAllocatedLeague)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::LikeAlreadyExists)
    }

    /// Check if a ledger post-condition failed after a mutation
    pub fn is_consistency_violation(&self) -> bool {
        matches!(self, Self::FailToCreateLike | Self::FailToDeleteLike)
    }

    /// Check if the caller may retry the same operation
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::LockTimeout { .. })
    }
}
