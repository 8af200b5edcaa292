//! Quadra API service
//!
//! HTTP backend for the Quadra court-booking app. Courts, users, matches,
//! and sessions live in in-memory stores that last for the lifetime of the
//! process; there is no external database.

pub mod error;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod seed;
pub mod session;
pub mod state;
pub mod validation;
