//! Custom error types for the common library
//!
//! This module defines the domain-level failures reported by the court,
//! user, and match stores. Services wrap these into their transport-level
//! error types.

use thiserror::Error;

/// Custom error type for store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The referenced court does not exist
    #[error("Court not found")]
    CourtNotFound,

    /// The referenced user does not exist
    #[error("User not found")]
    UserNotFound,

    /// The referenced match does not exist
    #[error("Match not found")]
    MatchNotFound,

    /// Another account already uses this email
    #[error("Email already registered")]
    EmailTaken,

    /// Login failed; does not say which part was wrong
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The court is already on the user's favorites list
    #[error("Court already in favorites")]
    DuplicateFavorite,

    /// The user is already an affiliated member of the court
    #[error("Already affiliated with this court")]
    AlreadyAffiliated,

    /// An earlier affiliation request is still awaiting review
    #[error("Affiliation request already pending")]
    AffiliationPending,

    /// Approval or denial without a matching pending request
    #[error("No pending affiliation request")]
    NoPendingRequest,

    /// Operation reserved for the creator of the resource
    #[error("{0}")]
    Forbidden(&'static str),

    /// Match participation requires membership of the court
    #[error("You need to be affiliated with this court to join matches")]
    NotAffiliated,

    /// Password hashing or verification failed
    #[error("Password hashing error: {0}")]
    PasswordHash(String),
}

/// Type alias for Result with StoreError
pub type StoreResult<T> = Result<T, StoreError>;
