//! Session management in process memory
//!
//! Tracks the live token for each signed-in user. A user has at most one
//! session; logging in again replaces it, logging out removes it. Expired
//! entries are swept on login and ignored on lookup.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct Session {
    token: String,
    expires_at: DateTime<Utc>,
}

/// Session manager for signed-in users
#[derive(Clone, Default)]
pub struct SessionManager {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new session for a user, replacing any existing one
    pub async fn create_session(&self, user_id: Uuid, token: &str, expiry_seconds: u64) {
        info!("Creating session for user: {}", user_id);

        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, session| session.expires_at > now);
        sessions.insert(
            user_id,
            Session {
                token: token.to_string(),
                expires_at: now + Duration::seconds(expiry_seconds as i64),
            },
        );
    }

    /// Get the live token for a user
    pub async fn get_session(&self, user_id: Uuid) -> Option<String> {
        self.sessions
            .read()
            .await
            .get(&user_id)
            .filter(|session| session.expires_at > Utc::now())
            .map(|session| session.token.clone())
    }

    /// Delete a session for a user
    pub async fn delete_session(&self, user_id: Uuid) {
        info!("Deleting session for user: {}", user_id);
        self.sessions.write().await.remove(&user_id);
    }

    /// Check if a session exists and matches the presented token
    pub async fn is_session_valid(&self, user_id: Uuid, token: &str) -> bool {
        match self.get_session(user_id).await {
            Some(stored_token) => stored_token == token,
            None => false,
        }
    }
}
