//! User repository backed by process memory
//!
//! Besides account records this store owns the affiliation bookkeeping:
//! which courts a user favorited, created, belongs to, or has asked to
//! join. A user is in at most one affiliation state per court.

use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use common::error::{StoreError, StoreResult};

use crate::models::{AffiliationStatus, NewUser, User};

/// User repository for account and affiliation operations
#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl UserStore {
    /// Create a new, empty user store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new account with a freshly hashed password
    pub async fn sign_up(&self, payload: NewUser) -> StoreResult<User> {
        let mut users = self.users.write().await;

        if users.iter().any(|user| user.email == payload.email) {
            return Err(StoreError::EmailTaken);
        }

        let salt = SaltString::generate(&mut rand::thread_rng());
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(payload.password.as_bytes(), &salt)
            .map_err(|e| StoreError::PasswordHash(e.to_string()))?
            .to_string();

        let user = User {
            id: Uuid::new_v4(),
            email: payload.email,
            password_hash,
            name: payload.name,
            favorite_courts: Vec::new(),
            created_courts: Vec::new(),
            affiliated_courts: Vec::new(),
            pending_affiliations: Vec::new(),
            created_at: Utc::now(),
        };

        info!("Registered user: {}", user.email);
        users.push(user.clone());
        Ok(user)
    }

    /// Check email and password against a stored account
    ///
    /// The error never reveals whether the email or the password was wrong.
    pub async fn verify_credentials(&self, email: &str, password: &str) -> StoreResult<User> {
        let users = self.users.read().await;
        let user = users
            .iter()
            .find(|user| user.email == email)
            .ok_or(StoreError::InvalidCredentials)?;

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| StoreError::PasswordHash(e.to_string()))?;

        let argon2 = Argon2::default();
        if argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_err()
        {
            return Err(StoreError::InvalidCredentials);
        }

        Ok(user.clone())
    }

    /// Find a user by ID
    pub async fn find(&self, id: Uuid) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.id == id)
            .cloned()
    }

    /// Bookmark a court
    pub async fn add_favorite(&self, user_id: Uuid, court_id: Uuid) -> StoreResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or(StoreError::UserNotFound)?;

        if user.favorite_courts.contains(&court_id) {
            return Err(StoreError::DuplicateFavorite);
        }

        user.favorite_courts.push(court_id);
        Ok(())
    }

    /// Remove a bookmark; removing an absent favorite is not an error
    pub async fn remove_favorite(&self, user_id: Uuid, court_id: Uuid) -> StoreResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or(StoreError::UserNotFound)?;

        user.favorite_courts.retain(|id| *id != court_id);
        Ok(())
    }

    /// IDs of the user's favorite courts
    pub async fn favorites_of(&self, user_id: Uuid) -> Vec<Uuid> {
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.id == user_id)
            .map(|user| user.favorite_courts.clone())
            .unwrap_or_default()
    }

    /// Record court ownership on the creator's account
    pub async fn record_created_court(&self, user_id: Uuid, court_id: Uuid) {
        let mut users = self.users.write().await;
        if let Some(user) = users.iter_mut().find(|user| user.id == user_id) {
            if !user.created_courts.contains(&court_id) {
                user.created_courts.push(court_id);
            }
        }
    }

    /// Drop a court from the creator's ownership list
    pub async fn forget_created_court(&self, user_id: Uuid, court_id: Uuid) {
        let mut users = self.users.write().await;
        if let Some(user) = users.iter_mut().find(|user| user.id == user_id) {
            user.created_courts.retain(|id| *id != court_id);
        }
    }

    /// Whether the user manages the court
    pub async fn can_edit_court(&self, user_id: Uuid, court_id: Uuid) -> bool {
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.id == user_id)
            .is_some_and(|user| user.created_courts.contains(&court_id))
    }

    /// IDs of the courts the user created
    pub async fn created_courts_of(&self, user_id: Uuid) -> Vec<Uuid> {
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.id == user_id)
            .map(|user| user.created_courts.clone())
            .unwrap_or_default()
    }

    /// IDs of the courts the user is an approved member of
    pub async fn affiliated_courts_of(&self, user_id: Uuid) -> Vec<Uuid> {
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.id == user_id)
            .map(|user| user.affiliated_courts.clone())
            .unwrap_or_default()
    }

    /// File an affiliation request for a court
    ///
    /// Creators count as already affiliated with their own courts.
    pub async fn request_affiliation(&self, user_id: Uuid, court_id: Uuid) -> StoreResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or(StoreError::UserNotFound)?;

        if user.affiliated_courts.contains(&court_id) || user.created_courts.contains(&court_id) {
            return Err(StoreError::AlreadyAffiliated);
        }
        if user.pending_affiliations.contains(&court_id) {
            return Err(StoreError::AffiliationPending);
        }

        user.pending_affiliations.push(court_id);
        info!("Affiliation requested: user={} court={}", user_id, court_id);
        Ok(())
    }

    /// Approve a pending request, moving it to the affiliated list
    ///
    /// Only a creator of the court may approve.
    pub async fn approve_affiliation(
        &self,
        actor: Uuid,
        target: Uuid,
        court_id: Uuid,
    ) -> StoreResult<()> {
        let mut users = self.users.write().await;

        if !manages_court(&users, actor, court_id) {
            return Err(StoreError::Forbidden("Only court creator can approve affiliations"));
        }

        let user = users
            .iter_mut()
            .find(|user| user.id == target)
            .ok_or(StoreError::UserNotFound)?;

        if !user.pending_affiliations.contains(&court_id) {
            return Err(StoreError::NoPendingRequest);
        }

        user.pending_affiliations.retain(|id| *id != court_id);
        if !user.affiliated_courts.contains(&court_id) {
            user.affiliated_courts.push(court_id);
        }

        info!("Affiliation approved: user={} court={}", target, court_id);
        Ok(())
    }

    /// Deny a pending request, discarding it
    ///
    /// Only a creator of the court may deny.
    pub async fn deny_affiliation(
        &self,
        actor: Uuid,
        target: Uuid,
        court_id: Uuid,
    ) -> StoreResult<()> {
        let mut users = self.users.write().await;

        if !manages_court(&users, actor, court_id) {
            return Err(StoreError::Forbidden("Only court creator can deny affiliations"));
        }

        let user = users
            .iter_mut()
            .find(|user| user.id == target)
            .ok_or(StoreError::UserNotFound)?;

        if !user.pending_affiliations.contains(&court_id) {
            return Err(StoreError::NoPendingRequest);
        }

        user.pending_affiliations.retain(|id| *id != court_id);
        info!("Affiliation denied: user={} court={}", target, court_id);
        Ok(())
    }

    /// The user's standing at a court
    pub async fn affiliation_status(&self, user_id: Uuid, court_id: Uuid) -> AffiliationStatus {
        let users = self.users.read().await;
        match users.iter().find(|user| user.id == user_id) {
            Some(user) if user.created_courts.contains(&court_id) => AffiliationStatus::Creator,
            Some(user) if user.affiliated_courts.contains(&court_id) => {
                AffiliationStatus::Affiliated
            }
            Some(user) if user.pending_affiliations.contains(&court_id) => {
                AffiliationStatus::Pending
            }
            _ => AffiliationStatus::None,
        }
    }

    /// Users with a pending request for the court
    pub async fn pending_for_court(&self, court_id: Uuid) -> Vec<User> {
        self.users
            .read()
            .await
            .iter()
            .filter(|user| user.pending_affiliations.contains(&court_id))
            .cloned()
            .collect()
    }

    /// Users who are approved members of the court
    pub async fn affiliated_with_court(&self, court_id: Uuid) -> Vec<User> {
        self.users
            .read()
            .await
            .iter()
            .filter(|user| user.affiliated_courts.contains(&court_id))
            .cloned()
            .collect()
    }
}

fn manages_court(users: &[User], actor: Uuid, court_id: Uuid) -> bool {
    users
        .iter()
        .find(|user| user.id == actor)
        .is_some_and(|user| user.created_courts.contains(&court_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str, name: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password: "correct-horse-battery".to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn sign_up_hashes_password() {
        let store = UserStore::new();
        let user = store
            .sign_up(new_user("ana@example.com", "Ana"))
            .await
            .unwrap();

        assert_ne!(user.password_hash, "correct-horse-battery");
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn sign_up_rejects_duplicate_email() {
        let store = UserStore::new();
        store
            .sign_up(new_user("ana@example.com", "Ana"))
            .await
            .unwrap();

        let result = store.sign_up(new_user("ana@example.com", "Outra Ana")).await;
        assert_eq!(result.unwrap_err(), StoreError::EmailTaken);
    }

    #[tokio::test]
    async fn verify_credentials_accepts_correct_password() {
        let store = UserStore::new();
        let created = store
            .sign_up(new_user("ana@example.com", "Ana"))
            .await
            .unwrap();

        let verified = store
            .verify_credentials("ana@example.com", "correct-horse-battery")
            .await
            .unwrap();
        assert_eq!(verified.id, created.id);
    }

    #[tokio::test]
    async fn verify_credentials_rejects_wrong_password_and_unknown_email() {
        let store = UserStore::new();
        store
            .sign_up(new_user("ana@example.com", "Ana"))
            .await
            .unwrap();

        let result = store.verify_credentials("ana@example.com", "nope").await;
        assert_eq!(result.unwrap_err(), StoreError::InvalidCredentials);

        let result = store
            .verify_credentials("ghost@example.com", "correct-horse-battery")
            .await;
        assert_eq!(result.unwrap_err(), StoreError::InvalidCredentials);
    }

    #[tokio::test]
    async fn favorites_reject_duplicates_but_remove_silently() {
        let store = UserStore::new();
        let user = store
            .sign_up(new_user("ana@example.com", "Ana"))
            .await
            .unwrap();
        let court_id = Uuid::new_v4();

        store.add_favorite(user.id, court_id).await.unwrap();
        let result = store.add_favorite(user.id, court_id).await;
        assert_eq!(result.unwrap_err(), StoreError::DuplicateFavorite);

        store.remove_favorite(user.id, court_id).await.unwrap();
        assert!(store.favorites_of(user.id).await.is_empty());

        // removing again still succeeds
        store.remove_favorite(user.id, court_id).await.unwrap();
    }

    #[tokio::test]
    async fn affiliation_request_moves_through_states() {
        let store = UserStore::new();
        let owner = store
            .sign_up(new_user("owner@example.com", "Dono"))
            .await
            .unwrap();
        let member = store
            .sign_up(new_user("member@example.com", "Atleta"))
            .await
            .unwrap();
        let court_id = Uuid::new_v4();
        store.record_created_court(owner.id, court_id).await;

        assert_eq!(
            store.affiliation_status(member.id, court_id).await,
            AffiliationStatus::None
        );

        store.request_affiliation(member.id, court_id).await.unwrap();
        assert_eq!(
            store.affiliation_status(member.id, court_id).await,
            AffiliationStatus::Pending
        );

        store
            .approve_affiliation(owner.id, member.id, court_id)
            .await
            .unwrap();
        assert_eq!(
            store.affiliation_status(member.id, court_id).await,
            AffiliationStatus::Affiliated
        );
        assert!(store.pending_for_court(court_id).await.is_empty());
    }

    #[tokio::test]
    async fn double_affiliation_request_fails() {
        let store = UserStore::new();
        let member = store
            .sign_up(new_user("member@example.com", "Atleta"))
            .await
            .unwrap();
        let court_id = Uuid::new_v4();

        store.request_affiliation(member.id, court_id).await.unwrap();
        let result = store.request_affiliation(member.id, court_id).await;
        assert_eq!(result.unwrap_err(), StoreError::AffiliationPending);
    }

    #[tokio::test]
    async fn affiliated_member_cannot_request_again() {
        let store = UserStore::new();
        let owner = store
            .sign_up(new_user("owner@example.com", "Dono"))
            .await
            .unwrap();
        let member = store
            .sign_up(new_user("member@example.com", "Atleta"))
            .await
            .unwrap();
        let court_id = Uuid::new_v4();
        store.record_created_court(owner.id, court_id).await;

        store.request_affiliation(member.id, court_id).await.unwrap();
        store
            .approve_affiliation(owner.id, member.id, court_id)
            .await
            .unwrap();

        let result = store.request_affiliation(member.id, court_id).await;
        assert_eq!(result.unwrap_err(), StoreError::AlreadyAffiliated);
    }

    #[tokio::test]
    async fn creator_counts_as_affiliated_with_own_court() {
        let store = UserStore::new();
        let owner = store
            .sign_up(new_user("owner@example.com", "Dono"))
            .await
            .unwrap();
        let court_id = Uuid::new_v4();
        store.record_created_court(owner.id, court_id).await;

        assert_eq!(
            store.affiliation_status(owner.id, court_id).await,
            AffiliationStatus::Creator
        );
        let result = store.request_affiliation(owner.id, court_id).await;
        assert_eq!(result.unwrap_err(), StoreError::AlreadyAffiliated);
    }

    #[tokio::test]
    async fn only_creator_approves_or_denies() {
        let store = UserStore::new();
        let owner = store
            .sign_up(new_user("owner@example.com", "Dono"))
            .await
            .unwrap();
        let member = store
            .sign_up(new_user("member@example.com", "Atleta"))
            .await
            .unwrap();
        let stranger = store
            .sign_up(new_user("stranger@example.com", "Visitante"))
            .await
            .unwrap();
        let court_id = Uuid::new_v4();
        store.record_created_court(owner.id, court_id).await;
        store.request_affiliation(member.id, court_id).await.unwrap();

        let result = store
            .approve_affiliation(stranger.id, member.id, court_id)
            .await;
        assert!(matches!(result, Err(StoreError::Forbidden(_))));

        let result = store.deny_affiliation(stranger.id, member.id, court_id).await;
        assert!(matches!(result, Err(StoreError::Forbidden(_))));

        store
            .deny_affiliation(owner.id, member.id, court_id)
            .await
            .unwrap();
        assert_eq!(
            store.affiliation_status(member.id, court_id).await,
            AffiliationStatus::None
        );
    }

    #[tokio::test]
    async fn approve_without_pending_request_fails() {
        let store = UserStore::new();
        let owner = store
            .sign_up(new_user("owner@example.com", "Dono"))
            .await
            .unwrap();
        let member = store
            .sign_up(new_user("member@example.com", "Atleta"))
            .await
            .unwrap();
        let court_id = Uuid::new_v4();
        store.record_created_court(owner.id, court_id).await;

        let result = store.approve_affiliation(owner.id, member.id, court_id).await;
        assert_eq!(result.unwrap_err(), StoreError::NoPendingRequest);
    }

    #[tokio::test]
    async fn forget_created_court_drops_ownership() {
        let store = UserStore::new();
        let owner = store
            .sign_up(new_user("owner@example.com", "Dono"))
            .await
            .unwrap();
        let court_id = Uuid::new_v4();

        store.record_created_court(owner.id, court_id).await;
        assert!(store.can_edit_court(owner.id, court_id).await);

        store.forget_created_court(owner.id, court_id).await;
        assert!(!store.can_edit_court(owner.id, court_id).await);
    }
}
