//! Sign-up, login, logout, and profile handlers

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{
    error::ApiError,
    middleware::AuthUser,
    models::{NewUser, User, UserResponse},
    state::AppState,
    validation,
};

/// Request for user registration
#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Request for user login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response carrying a fresh bearer token and the account it belongs to
#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user: UserResponse,
}

/// Register a new account
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validation::validate_name(&payload.name).map_err(ApiError::BadRequest)?;
    validation::validate_email(&payload.email).map_err(ApiError::BadRequest)?;
    validation::validate_password(&payload.password).map_err(ApiError::BadRequest)?;

    let user = state
        .users
        .sign_up(NewUser {
            email: payload.email,
            password: payload.password,
            name: payload.name,
        })
        .await?;

    let response = issue_token(&state, &user).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Exchange credentials for a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Login attempt: {}", payload.email);

    let user = state
        .users
        .verify_credentials(&payload.email, &payload.password)
        .await?;

    let response = issue_token(&state, &user).await?;
    Ok(Json(response))
}

/// Close the caller's session
pub async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    state.sessions.delete_session(user.id).await;
    Ok(Json(serde_json::json!({"message": "Logged out successfully"})))
}

/// Profile of the signed-in user
pub async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let profile = state
        .users
        .find(user.id)
        .await
        .ok_or(ApiError::Unauthorized)?;

    Ok(Json(UserResponse::from(profile)))
}

async fn issue_token(state: &AppState, user: &User) -> Result<TokenResponse, ApiError> {
    let access_token = state.jwt.generate_token(user.id).map_err(|e| {
        error!("Failed to generate token: {}", e);
        ApiError::InternalServerError
    })?;

    state
        .sessions
        .create_session(user.id, &access_token, state.jwt.token_expiry())
        .await;

    Ok(TokenResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.jwt.token_expiry(),
        user: UserResponse::from(user.clone()),
    })
}
