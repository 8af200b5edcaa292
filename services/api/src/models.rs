//! API models for the court-booking domain

pub mod court;
pub mod matches;
pub mod user;

pub use court::{Court, CourtResponse, DayOfWeek, Dimensions, NewCourt, Schedule, UpdateCourt};
pub use matches::{Attendee, Match, NewMatch, UpdateMatch};
pub use user::{AffiliationStatus, NewUser, User, UserResponse, UserSummary};
