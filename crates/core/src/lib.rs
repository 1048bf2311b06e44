//! Ordnung Core - recurrence expansion engine for the goal calendar.
//!
//! Given a target date, a window around it and the goal definitions of a
//! user or group, this crate computes which goals occur on which day and
//! organizes the result for presentation. Storage and the clock are
//! collaborators behind traits; everything else is pure computation.

pub mod calendar;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod occurrences;
pub mod settings;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
