//! User model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// Argon2 hash, never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    /// Courts the user bookmarked
    pub favorite_courts: Vec<Uuid>,
    /// Courts the user registered and manages
    pub created_courts: Vec<Uuid>,
    /// Courts the user is an approved member of
    pub affiliated_courts: Vec<Uuid>,
    /// Courts with an affiliation request awaiting review
    pub pending_affiliations: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// New user registration payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Response for user operations
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub favorite_courts: Vec<Uuid>,
    pub created_courts: Vec<Uuid>,
    pub affiliated_courts: Vec<Uuid>,
    pub pending_affiliations: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            favorite_courts: user.favorite_courts,
            created_courts: user.created_courts,
            affiliated_courts: user.affiliated_courts,
            pending_affiliations: user.pending_affiliations,
            created_at: user.created_at,
        }
    }
}

/// Compact user reference for rosters and affiliation lists
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Relationship between a user and a court; exactly one holds at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffiliationStatus {
    /// The user registered the court and manages it
    Creator,
    /// The user is an approved member
    Affiliated,
    /// A request is awaiting the creator's review
    Pending,
    /// No relationship
    None,
}

impl AffiliationStatus {
    /// Whether the user may take part in matches at the court
    pub fn can_participate(self) -> bool {
        matches!(self, AffiliationStatus::Creator | AffiliationStatus::Affiliated)
    }
}
