//! Application state shared across handlers

use crate::{
    jwt::JwtService,
    repositories::{CourtStore, MatchStore, UserStore},
    session::SessionManager,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub courts: CourtStore,
    pub users: UserStore,
    pub matches: MatchStore,
    pub sessions: SessionManager,
    pub jwt: JwtService,
}

impl AppState {
    /// Build a fresh state with empty stores
    pub fn new(jwt: JwtService) -> Self {
        Self {
            courts: CourtStore::new(),
            users: UserStore::new(),
            matches: MatchStore::new(),
            sessions: SessionManager::new(),
            jwt,
        }
    }
}
