//! In-memory repositories for the court-booking domain
//!
//! Every store keeps its records in a `Vec` behind an async `RwLock` and
//! lives for the lifetime of the process. Handlers clone the store handles
//! freely; the data itself is shared.

pub mod courts;
pub mod matches;
pub mod users;

pub use courts::CourtStore;
pub use matches::MatchStore;
pub use users::UserStore;
