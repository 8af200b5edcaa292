//! Court registry and favorites handlers

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use common::error::StoreError;

use crate::{
    error::ApiError,
    middleware::AuthUser,
    models::{CourtResponse, NewCourt, UpdateCourt},
    state::AppState,
};

/// Optional filters for the court listing
#[derive(Debug, Deserialize)]
pub struct CourtListQuery {
    pub city: Option<String>,
    pub neighborhood: Option<String>,
}

/// List courts, optionally filtered by city and neighborhood
pub async fn list_courts(
    State(state): State<AppState>,
    Query(query): Query<CourtListQuery>,
) -> impl IntoResponse {
    let courts = state
        .courts
        .search(query.city.as_deref(), query.neighborhood.as_deref())
        .await;

    let courts: Vec<CourtResponse> = courts.into_iter().map(CourtResponse::from).collect();
    Json(courts)
}

/// Get a court by ID
pub async fn get_court(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let court = state
        .courts
        .find(id)
        .await
        .ok_or(StoreError::CourtNotFound)?;

    Ok(Json(CourtResponse::from(court)))
}

/// Register a new court; the caller becomes its creator
pub async fn create_court(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<NewCourt>,
) -> Result<impl IntoResponse, ApiError> {
    let court = state.courts.add(payload, Some(user.id)).await;
    state.users.record_created_court(user.id, court.id).await;

    Ok((StatusCode::CREATED, Json(CourtResponse::from(court))))
}

/// Update a court's details
pub async fn update_court(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCourt>,
) -> Result<impl IntoResponse, ApiError> {
    let court = state.courts.update(id, user.id, payload).await?;
    Ok(Json(CourtResponse::from(court)))
}

/// Delete a court
pub async fn delete_court(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state.courts.remove(id, user.id).await?;
    state.users.forget_created_court(user.id, id).await;

    Ok(Json(json!({"message": "Court deleted successfully"})))
}

/// Courts registered by the caller
pub async fn my_courts(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> impl IntoResponse {
    let courts = state.courts.by_creator(user.id).await;
    let courts: Vec<CourtResponse> = courts.into_iter().map(CourtResponse::from).collect();
    Json(courts)
}

/// The caller's favorite courts
///
/// Favorites pointing at courts that no longer exist are skipped.
pub async fn favorite_courts(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> impl IntoResponse {
    let mut courts = Vec::new();
    for court_id in state.users.favorites_of(user.id).await {
        if let Some(court) = state.courts.find(court_id).await {
            courts.push(CourtResponse::from(court));
        }
    }

    Json(courts)
}

/// Bookmark a court
pub async fn add_favorite(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(court_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.courts.exists(court_id).await {
        return Err(StoreError::CourtNotFound.into());
    }

    state.users.add_favorite(user.id, court_id).await?;
    Ok(Json(json!({"message": "Court added to favorites"})))
}

/// Remove a bookmark
pub async fn remove_favorite(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(court_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state.users.remove_favorite(user.id, court_id).await?;
    Ok(Json(json!({"message": "Court removed from favorites"})))
}
