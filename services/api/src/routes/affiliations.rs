//! Affiliation workflow handlers
//!
//! Players ask to join a court, the court's creator approves or denies.
//! Creators never file requests for their own courts; they are members by
//! definition.

use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use common::error::StoreError;

use crate::{
    error::ApiError,
    middleware::AuthUser,
    models::{AffiliationStatus, CourtResponse, UserSummary},
    state::AppState,
};

/// Pending and approved members of a court
#[derive(Serialize)]
pub struct CourtMembersResponse {
    pub pending: Vec<UserSummary>,
    pub affiliated: Vec<UserSummary>,
}

/// The caller's standing at a court
#[derive(Serialize)]
pub struct AffiliationStatusResponse {
    pub status: AffiliationStatus,
}

/// A pending request on one of the caller's courts
#[derive(Serialize)]
pub struct AffiliationRequestResponse {
    pub court: CourtResponse,
    pub user: UserSummary,
}

/// Ask to join a court
pub async fn request_affiliation(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.courts.exists(id).await {
        return Err(StoreError::CourtNotFound.into());
    }

    state.users.request_affiliation(user.id, id).await?;
    Ok(Json(json!({"message": "Affiliation request sent"})))
}

/// Approve a pending request
pub async fn approve(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    state.users.approve_affiliation(user.id, user_id, id).await?;
    Ok(Json(json!({"message": "Affiliation approved"})))
}

/// Deny a pending request
pub async fn deny(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    state.users.deny_affiliation(user.id, user_id, id).await?;
    Ok(Json(json!({"message": "Affiliation denied"})))
}

/// The caller's affiliation status at a court
pub async fn my_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.courts.exists(id).await {
        return Err(StoreError::CourtNotFound.into());
    }

    let status = state.users.affiliation_status(user.id, id).await;
    Ok(Json(AffiliationStatusResponse { status }))
}

/// Pending and approved members of a court, visible to its creator
pub async fn court_members(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.courts.exists(id).await {
        return Err(StoreError::CourtNotFound.into());
    }
    if !state.users.can_edit_court(user.id, id).await {
        return Err(StoreError::Forbidden("Only court creator can view affiliations").into());
    }

    let pending = state.users.pending_for_court(id).await;
    let affiliated = state.users.affiliated_with_court(id).await;

    Ok(Json(CourtMembersResponse {
        pending: pending.iter().map(UserSummary::from).collect(),
        affiliated: affiliated.iter().map(UserSummary::from).collect(),
    }))
}

/// Courts the caller is an approved member of
pub async fn my_affiliations(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> impl IntoResponse {
    let mut courts = Vec::new();
    for court_id in state.users.affiliated_courts_of(user.id).await {
        if let Some(court) = state.courts.find(court_id).await {
            courts.push(CourtResponse::from(court));
        }
    }

    Json(courts)
}

/// Pending requests across every court the caller created
pub async fn incoming_requests(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> impl IntoResponse {
    let mut requests = Vec::new();
    for court_id in state.users.created_courts_of(user.id).await {
        let Some(court) = state.courts.find(court_id).await else {
            continue;
        };

        for pending_user in state.users.pending_for_court(court_id).await {
            requests.push(AffiliationRequestResponse {
                court: CourtResponse::from(court.clone()),
                user: UserSummary::from(&pending_user),
            });
        }
    }

    Json(requests)
}
