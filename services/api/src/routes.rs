//! API service routes
//!
//! Public routes cover sign-up, login, and read access to the court
//! registry. Everything that writes on behalf of a user sits behind the
//! authentication middleware.

use axum::{
    Json, Router,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;

use crate::{middleware::auth_middleware, state::AppState};

pub mod affiliations;
pub mod auth;
pub mod courts;
pub mod matches;

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/auth/logout", post(auth::logout))
        .route("/me", get(auth::me))
        .route("/me/courts", get(courts::my_courts))
        .route("/me/favorites", get(courts::favorite_courts))
        .route("/me/favorites/:court_id", post(courts::add_favorite))
        .route("/me/favorites/:court_id", delete(courts::remove_favorite))
        .route("/me/affiliations", get(affiliations::my_affiliations))
        .route("/me/affiliations/requests", get(affiliations::incoming_requests))
        .route("/courts", post(courts::create_court))
        .route("/courts/:id", put(courts::update_court))
        .route("/courts/:id", delete(courts::delete_court))
        .route("/courts/:id/affiliations", get(affiliations::court_members))
        .route("/courts/:id/affiliations", post(affiliations::request_affiliation))
        .route("/courts/:id/affiliations/me", get(affiliations::my_status))
        .route(
            "/courts/:id/affiliations/:user_id/approve",
            post(affiliations::approve),
        )
        .route(
            "/courts/:id/affiliations/:user_id/deny",
            post(affiliations::deny),
        )
        .route("/courts/:id/matches", post(matches::create_match))
        .route("/matches/:id", put(matches::update_match))
        .route("/matches/:id", delete(matches::delete_match))
        .route("/matches/:id/attendance", post(matches::toggle_attendance))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/courts", get(courts::list_courts))
        .route("/courts/:id", get(courts::get_court))
        .route("/courts/:id/matches", get(matches::court_matches))
        .route("/matches/:id", get(matches::get_match))
        .merge(protected_routes)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "quadra-api"
    }))
}
