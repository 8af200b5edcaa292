//! Common library for the Quadra application
//!
//! This crate provides shared functionality for the Quadra court-booking
//! backend, including server configuration and the domain error types
//! reported by the in-memory stores.

pub mod config;
pub mod error;
