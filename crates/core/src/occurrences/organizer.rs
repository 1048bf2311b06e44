//! Occurrence organizer: groups expanded occurrences by day.

use log::{debug, error, warn};
use std::collections::HashSet;

use super::occurrence_model::{DateWindow, Occurrence, OccurrencesByDay};
use crate::errors::{IntegrityError, Result};
use crate::utils::time_utils::date_key;

/// Groups `occurrences` into one ordered list per window day.
///
/// - Every day of the window gets a key, even when nothing occurs on it.
/// - An occurrence dated outside the window is an integrity error.
/// - Repeated `(goal_id, date)` pairs are kept once, first one wins.
/// - Each day is stably sorted by persistence kind.
pub fn organize(occurrences: Vec<Occurrence>, window: &DateWindow) -> Result<OccurrencesByDay> {
    let mut by_day: OccurrencesByDay = window
        .days()
        .into_iter()
        .map(|day| (date_key(day), Vec::new()))
        .collect();

    let mut seen: HashSet<(String, chrono::NaiveDate)> = HashSet::with_capacity(occurrences.len());
    let mut duplicates = 0usize;

    for occurrence in occurrences {
        if !window.contains(occurrence.occurrence_date) {
            error!(
                "Occurrence outside window: goal={} day={} window={}..={} target={}",
                occurrence.goal_id,
                occurrence.occurrence_date,
                window.start(),
                window.end(),
                window.target_date()
            );
            return Err(IntegrityError::OccurrenceOutsideWindow {
                goal_id: occurrence.goal_id,
                date: occurrence.occurrence_date,
                start: window.start(),
                end: window.end(),
            }
            .into());
        }

        if !seen.insert((occurrence.goal_id.clone(), occurrence.occurrence_date)) {
            duplicates += 1;
            continue;
        }

        by_day
            .entry(date_key(occurrence.occurrence_date))
            .or_default()
            .push(occurrence);
    }

    if duplicates > 0 {
        warn!(
            "Dropped {} duplicate occurrences in window {}..={}",
            duplicates,
            window.start(),
            window.end()
        );
    }

    for day_occurrences in by_day.values_mut() {
        day_occurrences.sort_by_key(|occurrence| occurrence.persistence_kind);
    }

    debug!(
        "Organized occurrences into {} days for window {}..={}",
        by_day.len(),
        window.start(),
        window.end()
    );
    Ok(by_day)
}
