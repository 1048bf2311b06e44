//! Core error types for the Ordnung calendar engine.
//!
//! Two families matter to callers: validation errors are the caller's fault
//! (malformed goals, bad request parameters) while integrity errors mean the
//! engine broke one of its own invariants. Integrity errors are never
//! recoverable and must not be swallowed.

use chrono::{NaiveDate, ParseError as ChronoParseError};
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown to end users when the calendar cannot be built.
pub const CALENDAR_BUILD_FAILED: &str = "Failed to build calendar";

/// Root error type for the calendar engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Calendar integrity violated: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl Error {
    /// Returns true when the error signals a broken engine invariant.
    pub fn is_integrity(&self) -> bool {
        matches!(self, Error::Integrity(_))
    }

    /// Message safe to show at the presentation boundary.
    ///
    /// Validation failures are the caller's fault and are reported verbatim.
    /// Everything else collapses into a generic message; the full context is
    /// expected to be in the logs already.
    pub fn public_message(&self) -> String {
        match self {
            Error::Validation(err) => err.to_string(),
            _ => CALENDAR_BUILD_FAILED.to_string(),
        }
    }
}

/// Validation errors for goal definitions and request parameters.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] ChronoParseError),

    #[error("Window offset {requested} exceeds the allowed maximum of {max} days")]
    WindowTooLarge { requested: u32, max: u32 },
}

/// Broken engine invariants.
#[derive(Error, Debug)]
pub enum IntegrityError {
    #[error("Occurrence of goal {goal_id} on {date} lies outside window {start}..={end}")]
    OccurrenceOutsideWindow {
        goal_id: String,
        date: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Unknown persistence kind id: {0}")]
    UnknownPersistenceKind(i32),
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}
