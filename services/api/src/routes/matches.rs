//! Match scheduling and attendance handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use uuid::Uuid;

use common::error::StoreError;

use crate::{
    error::ApiError,
    middleware::AuthUser,
    models::{NewMatch, UpdateMatch},
    state::AppState,
};

/// Matches scheduled at a court
pub async fn court_matches(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.courts.exists(id).await {
        return Err(StoreError::CourtNotFound.into());
    }

    Ok(Json(state.matches.by_court(id).await))
}

/// Get a match by ID
pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .matches
        .find(id)
        .await
        .ok_or(StoreError::MatchNotFound)?;

    Ok(Json(record))
}

/// Schedule a match at a court
///
/// Only the court's creator may schedule matches there.
pub async fn create_match(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<NewMatch>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.courts.exists(id).await {
        return Err(StoreError::CourtNotFound.into());
    }
    if !state.users.can_edit_court(user.id, id).await {
        return Err(StoreError::Forbidden("Only court creator can schedule matches").into());
    }

    let creator = state
        .users
        .find(user.id)
        .await
        .ok_or(ApiError::Unauthorized)?;

    let record = state.matches.create(id, &creator, payload).await;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Update a match's details
pub async fn update_match(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMatch>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state.matches.update(id, user.id, payload).await?;
    Ok(Json(record))
}

/// Cancel a match
pub async fn delete_match(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state.matches.remove(id, user.id).await?;
    Ok(Json(json!({"message": "Match deleted successfully"})))
}

/// Join a match or flip the caller's confirmation
///
/// Participation requires membership of the court hosting the match.
pub async fn toggle_attendance(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .matches
        .find(id)
        .await
        .ok_or(StoreError::MatchNotFound)?;

    let status = state.users.affiliation_status(user.id, record.court_id).await;
    if !status.can_participate() {
        return Err(StoreError::NotAffiliated.into());
    }

    let player = state
        .users
        .find(user.id)
        .await
        .ok_or(ApiError::Unauthorized)?;

    let updated = state.matches.toggle_attendance(id, &player).await?;
    Ok(Json(updated))
}
