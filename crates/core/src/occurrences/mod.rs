//! Occurrences module - recurrence expansion engine.
//!
//! ```text
//! GoalDefinition[] + DateWindow
//!          ↓
//!       expand  ──uses──▶  rules::occurs
//!          ↓
//!     Occurrence[]
//!          ↓
//!      organize
//!          ↓
//!   OccurrencesByDay ("YYYY-MM-DD" → ordered occurrences)
//! ```

mod expander;
mod occurrence_model;
mod organizer;
pub mod rules;

pub use expander::expand;
pub use occurrence_model::{DateWindow, Occurrence, OccurrencesByDay};
pub use organizer::organize;
pub use rules::occurs;

use crate::errors::Result;
use crate::goals::GoalDefinition;

/// Expands and organizes `goals` over `window` in one step.
pub fn occurrences_by_day(goals: &[GoalDefinition], window: &DateWindow) -> Result<OccurrencesByDay> {
    organize(expand(goals, window), window)
}
