//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use common::error::StoreError;

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Unauthorized access
    #[error("Unauthorized")]
    Unauthorized,

    /// Bad request with message
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,

    /// Domain error reported by a store
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
            ApiError::Store(err) => (store_status(&err), err.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

fn store_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::CourtNotFound
        | StoreError::UserNotFound
        | StoreError::MatchNotFound
        | StoreError::NoPendingRequest => StatusCode::NOT_FOUND,
        StoreError::EmailTaken
        | StoreError::DuplicateFavorite
        | StoreError::AlreadyAffiliated
        | StoreError::AffiliationPending => StatusCode::CONFLICT,
        StoreError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        StoreError::Forbidden(_) | StoreError::NotAffiliated => StatusCode::FORBIDDEN,
        StoreError::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
