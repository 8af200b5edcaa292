//! End-to-end exercises of the assembled application state
//!
//! These tests drive the stores, token service, and session manager
//! together the same way the HTTP handlers do, covering the full booking
//! lifecycle from sign-up to match attendance.

use chrono::{NaiveDate, NaiveTime};

use api::jwt::{JwtConfig, JwtService};
use api::models::{
    AffiliationStatus, DayOfWeek, Dimensions, NewCourt, NewMatch, NewUser, Schedule, UpdateCourt,
};
use api::seed;
use api::state::AppState;
use common::error::StoreError;

fn test_state() -> AppState {
    AppState::new(JwtService::new(JwtConfig {
        secret: "test-secret".to_string(),
        token_expiry: 3600,
    }))
}

fn new_user(email: &str, name: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        password: "correct-horse-battery".to_string(),
        name: name.to_string(),
    }
}

fn new_court(name: &str, neighborhood: &str) -> NewCourt {
    NewCourt {
        name: name.to_string(),
        location: "Complexo Esportivo".to_string(),
        address: "Rua das Quadras, 123".to_string(),
        city: "São Paulo".to_string(),
        neighborhood: neighborhood.to_string(),
        whatsapp: "5511999999999".to_string(),
        photo_url: None,
        responsible: "Ana Souza".to_string(),
        is_available: true,
        surface: "Hard".to_string(),
        dimensions: Dimensions {
            width: 10.97,
            length: 23.77,
        },
        schedule: Schedule {
            day_of_week: DayOfWeek::Saturday,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        },
    }
}

fn new_match() -> NewMatch {
    NewMatch {
        date: NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
        time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
        max_players: 10,
        description: "Rachão de sábado".to_string(),
    }
}

#[tokio::test]
async fn full_booking_journey() {
    let state = test_state();

    // two accounts
    let owner = state
        .users
        .sign_up(new_user("owner@quadra.app", "Ana"))
        .await
        .unwrap();
    let player = state
        .users
        .sign_up(new_user("player@quadra.app", "Bruno"))
        .await
        .unwrap();

    // the owner registers a court and becomes its creator
    let court = state
        .courts
        .add(new_court("Arena Ibirapuera", "Vila Mariana"), Some(owner.id))
        .await;
    state.users.record_created_court(owner.id, court.id).await;
    assert_eq!(
        state.users.affiliation_status(owner.id, court.id).await,
        AffiliationStatus::Creator
    );

    // the player finds it by neighborhood and bookmarks it
    let hits = state.courts.search(None, Some("mariana")).await;
    assert_eq!(hits.len(), 1);
    state.users.add_favorite(player.id, court.id).await.unwrap();

    // affiliation: request, visible to the owner, then approved
    state
        .users
        .request_affiliation(player.id, court.id)
        .await
        .unwrap();
    let pending = state.users.pending_for_court(court.id).await;
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, player.id);

    state
        .users
        .approve_affiliation(owner.id, player.id, court.id)
        .await
        .unwrap();
    assert_eq!(
        state.users.affiliation_status(player.id, court.id).await,
        AffiliationStatus::Affiliated
    );

    // the owner schedules a match and starts on the roster, unconfirmed
    let owner_account = state.users.find(owner.id).await.unwrap();
    let record = state
        .matches
        .create(court.id, &owner_account, new_match())
        .await;
    assert_eq!(record.attendees.len(), 1);
    assert!(!record.attendees[0].confirmed);

    // the player joins confirmed, then withdraws their confirmation
    let player_account = state.users.find(player.id).await.unwrap();
    let updated = state
        .matches
        .toggle_attendance(record.id, &player_account)
        .await
        .unwrap();
    let entry = updated
        .attendees
        .iter()
        .find(|attendee| attendee.user_id == player.id)
        .unwrap();
    assert!(entry.confirmed);

    let updated = state
        .matches
        .toggle_attendance(record.id, &player_account)
        .await
        .unwrap();
    let entry = updated
        .attendees
        .iter()
        .find(|attendee| attendee.user_id == player.id)
        .unwrap();
    assert!(!entry.confirmed);
    assert_eq!(updated.attendees.len(), 2);

    // the owner edits the court; the change is visible on lookup
    let changes = UpdateCourt {
        name: Some("Arena Ibirapuera Renovada".to_string()),
        ..Default::default()
    };
    state.courts.update(court.id, owner.id, changes).await.unwrap();
    let found = state.courts.find(court.id).await.unwrap();
    assert_eq!(found.name, "Arena Ibirapuera Renovada");
}

#[tokio::test]
async fn tokens_are_only_honored_while_the_session_lives() {
    let state = test_state();
    let user = state
        .users
        .sign_up(new_user("ana@quadra.app", "Ana"))
        .await
        .unwrap();

    // login: issue a token and open the session, as the login handler does
    let token = state.jwt.generate_token(user.id).unwrap();
    state
        .sessions
        .create_session(user.id, &token, state.jwt.token_expiry())
        .await;

    let claims = state.jwt.validate_token(&token).unwrap();
    assert_eq!(claims.sub, user.id);
    assert!(state.sessions.is_session_valid(user.id, &token).await);

    // a second login replaces the session; the first token dies with it
    let second_token = state.jwt.generate_token(user.id).unwrap();
    state
        .sessions
        .create_session(user.id, &second_token, state.jwt.token_expiry())
        .await;
    assert!(!state.sessions.is_session_valid(user.id, &token).await);
    assert!(state.sessions.is_session_valid(user.id, &second_token).await);

    // logout closes the session even though the token itself is unexpired
    state.sessions.delete_session(user.id).await;
    assert!(state.jwt.validate_token(&second_token).is_ok());
    assert!(!state.sessions.is_session_valid(user.id, &second_token).await);
}

#[tokio::test]
async fn participation_requires_membership() {
    let state = test_state();
    let owner = state
        .users
        .sign_up(new_user("owner@quadra.app", "Ana"))
        .await
        .unwrap();
    let stranger = state
        .users
        .sign_up(new_user("stranger@quadra.app", "Carla"))
        .await
        .unwrap();

    let court = state
        .courts
        .add(new_court("Arena Central", "Moema"), Some(owner.id))
        .await;
    state.users.record_created_court(owner.id, court.id).await;

    let owner_account = state.users.find(owner.id).await.unwrap();
    state
        .matches
        .create(court.id, &owner_account, new_match())
        .await;

    // the attendance handler checks standing before touching the roster
    let status = state.users.affiliation_status(stranger.id, court.id).await;
    assert!(!status.can_participate());

    // a pending request is not enough
    state
        .users
        .request_affiliation(stranger.id, court.id)
        .await
        .unwrap();
    let status = state.users.affiliation_status(stranger.id, court.id).await;
    assert_eq!(status, AffiliationStatus::Pending);
    assert!(!status.can_participate());
}

#[tokio::test]
async fn deleting_a_court_leaves_only_skippable_references() {
    let state = test_state();
    let owner = state
        .users
        .sign_up(new_user("owner@quadra.app", "Ana"))
        .await
        .unwrap();
    let fan = state
        .users
        .sign_up(new_user("fan@quadra.app", "Bruno"))
        .await
        .unwrap();

    let court = state
        .courts
        .add(new_court("Arena Efêmera", "Pinheiros"), Some(owner.id))
        .await;
    state.users.record_created_court(owner.id, court.id).await;
    state.users.add_favorite(fan.id, court.id).await.unwrap();

    state.courts.remove(court.id, owner.id).await.unwrap();
    state.users.forget_created_court(owner.id, court.id).await;

    // the favorite ID survives but hydration skips it, as the handler does
    let favorite_ids = state.users.favorites_of(fan.id).await;
    assert_eq!(favorite_ids, vec![court.id]);
    assert!(state.courts.find(court.id).await.is_none());
    assert!(!state.users.can_edit_court(owner.id, court.id).await);
}

#[tokio::test]
async fn demo_seed_is_browsable_but_not_editable() {
    let state = test_state();
    seed::seed_demo_courts(&state).await;

    let user = state
        .users
        .sign_up(new_user("ana@quadra.app", "Ana"))
        .await
        .unwrap();

    let courts = state.courts.search(Some("são paulo"), None).await;
    assert_eq!(courts.len(), 2);

    let result = state
        .courts
        .update(courts[0].id, user.id, UpdateCourt::default())
        .await;
    assert!(matches!(result, Err(StoreError::Forbidden(_))));

    // but anyone may ask to affiliate with a seeded court
    state
        .users
        .request_affiliation(user.id, courts[0].id)
        .await
        .unwrap();
    assert_eq!(
        state.users.affiliation_status(user.id, courts[0].id).await,
        AffiliationStatus::Pending
    );
}

#[tokio::test]
async fn duplicate_signup_and_bad_login_are_rejected() {
    let state = test_state();
    state
        .users
        .sign_up(new_user("ana@quadra.app", "Ana"))
        .await
        .unwrap();

    let result = state.users.sign_up(new_user("ana@quadra.app", "Ana 2")).await;
    assert_eq!(result.unwrap_err(), StoreError::EmailTaken);

    let result = state
        .users
        .verify_credentials("ana@quadra.app", "wrong-password")
        .await;
    assert_eq!(result.unwrap_err(), StoreError::InvalidCredentials);

    let user = state
        .users
        .verify_credentials("ana@quadra.app", "correct-horse-battery")
        .await
        .unwrap();
    assert_eq!(user.email, "ana@quadra.app");
}
