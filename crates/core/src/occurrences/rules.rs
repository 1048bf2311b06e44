//! Recurrence rule evaluator.
//!
//! One total predicate per persistence kind, dispatched on the enum tag.
//! Every predicate is pure: the answer depends only on the goal, the day
//! and the window being rendered.

use chrono::{Datelike, NaiveDate};

use super::occurrence_model::DateWindow;
use crate::goals::{GoalDefinition, PersistenceKind};
use crate::utils::time_utils::{iso_week_number, last_day_of_month, weekday_index};

/// Returns true when `goal` occurs on `day`.
///
/// `UntilComplete` and `EveryDay` goals are expected to carry a
/// `start_date` (enforced at goal creation). A definition without one never
/// occurs.
pub fn occurs(goal: &GoalDefinition, day: NaiveDate, window: &DateWindow) -> bool {
    let anchor = goal.anchor_date;
    match goal.persistence_kind {
        PersistenceKind::Once => day == anchor,
        PersistenceKind::UntilComplete => {
            within(day, goal.start_date, goal.end_date.unwrap_or(anchor))
        }
        PersistenceKind::EveryDay => {
            within(day, goal.start_date, goal.end_date.unwrap_or(window.end()))
        }
        PersistenceKind::EveryWeek => same_weekday(day, anchor),
        PersistenceKind::EveryOddWeek => {
            same_weekday(day, anchor) && iso_week_number(day) % 2 == 1
        }
        PersistenceKind::EveryEvenWeek => {
            same_weekday(day, anchor) && iso_week_number(day) % 2 == 0
        }
        PersistenceKind::FirstDayOfMonth => day.day() == 1,
        PersistenceKind::LastDayOfMonth => day.day() == last_day_of_month(day),
        PersistenceKind::EveryMonth => day.day() == anchor.day(),
        PersistenceKind::EveryYear => day.day() == anchor.day() && day.month() == anchor.month(),
    }
}

fn within(day: NaiveDate, start: Option<NaiveDate>, end: NaiveDate) -> bool {
    start.is_some_and(|start| start <= day && day <= end)
}

fn same_weekday(day: NaiveDate, anchor: NaiveDate) -> bool {
    weekday_index(day) == weekday_index(anchor)
}
