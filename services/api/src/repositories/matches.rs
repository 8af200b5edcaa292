//! Match repository backed by process memory

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use common::error::{StoreError, StoreResult};

use crate::models::{Attendee, Match, NewMatch, UpdateMatch, User};

/// Match repository for scheduling and attendance operations
#[derive(Clone, Default)]
pub struct MatchStore {
    matches: Arc<RwLock<Vec<Match>>>,
}

impl MatchStore {
    /// Create a new, empty match store
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a match at a court
    ///
    /// The creator joins the roster immediately, unconfirmed.
    pub async fn create(&self, court_id: Uuid, creator: &User, payload: NewMatch) -> Match {
        let record = Match {
            id: Uuid::new_v4(),
            court_id,
            creator_id: creator.id,
            date: payload.date,
            time: payload.time,
            max_players: payload.max_players,
            description: payload.description,
            attendees: vec![Attendee {
                user_id: creator.id,
                name: creator.name.clone(),
                confirmed: false,
            }],
            created_at: Utc::now(),
        };

        info!("Scheduling match at court {}: {}", court_id, record.date);
        self.matches.write().await.push(record.clone());
        record
    }

    /// Find a match by ID
    pub async fn find(&self, id: Uuid) -> Option<Match> {
        self.matches
            .read()
            .await
            .iter()
            .find(|record| record.id == id)
            .cloned()
    }

    /// Matches scheduled at the given court, in insertion order
    pub async fn by_court(&self, court_id: Uuid) -> Vec<Match> {
        self.matches
            .read()
            .await
            .iter()
            .filter(|record| record.court_id == court_id)
            .cloned()
            .collect()
    }

    /// Apply a partial update; only the match creator may edit
    ///
    /// The roster is never touched here.
    pub async fn update(&self, id: Uuid, actor: Uuid, changes: UpdateMatch) -> StoreResult<Match> {
        let mut matches = self.matches.write().await;
        let record = matches
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::MatchNotFound)?;

        if record.creator_id != actor {
            return Err(StoreError::Forbidden("Only match creator can edit this match"));
        }

        if let Some(date) = changes.date {
            record.date = date;
        }
        if let Some(time) = changes.time {
            record.time = time;
        }
        if let Some(max_players) = changes.max_players {
            record.max_players = max_players;
        }
        if let Some(description) = changes.description {
            record.description = description;
        }

        Ok(record.clone())
    }

    /// Cancel a match; only the match creator may delete
    pub async fn remove(&self, id: Uuid, actor: Uuid) -> StoreResult<()> {
        let mut matches = self.matches.write().await;
        let index = matches
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::MatchNotFound)?;

        if matches[index].creator_id != actor {
            return Err(StoreError::Forbidden("Only match creator can delete this match"));
        }

        matches.remove(index);
        info!("Removed match: {}", id);
        Ok(())
    }

    /// Join a match or flip the player's confirmation
    ///
    /// A player not yet on the roster joins confirmed; a player already on
    /// it has their confirmation toggled. Nobody is ever removed.
    pub async fn toggle_attendance(&self, id: Uuid, player: &User) -> StoreResult<Match> {
        let mut matches = self.matches.write().await;
        let record = matches
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::MatchNotFound)?;

        match record
            .attendees
            .iter_mut()
            .find(|attendee| attendee.user_id == player.id)
        {
            Some(attendee) => attendee.confirmed = !attendee.confirmed,
            None => record.attendees.push(Attendee {
                user_id: player.id,
                name: player.name.clone(),
                confirmed: true,
            }),
        }

        Ok(record.clone())
    }
}
