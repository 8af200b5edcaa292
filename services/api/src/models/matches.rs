//! Match model and related functionality

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A player on a match roster
///
/// `name` is a snapshot taken when the player joined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendee {
    pub user_id: Uuid,
    pub name: String,
    pub confirmed: bool,
}

/// Match entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: Uuid,
    pub court_id: Uuid,
    pub creator_id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Advisory roster size, shown to players but not enforced
    pub max_players: u32,
    pub description: String,
    pub attendees: Vec<Attendee>,
    pub created_at: DateTime<Utc>,
}

/// New match creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMatch {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub max_players: u32,
    #[serde(default)]
    pub description: String,
}

/// Match update payload; `None` fields are left unchanged
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateMatch {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub max_players: Option<u32>,
    pub description: Option<String>,
}
