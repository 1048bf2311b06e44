//! Occurrence expander: window days x goal definitions, filtered by the
//! recurrence rules.

use log::debug;
use rayon::prelude::*;

use super::occurrence_model::{DateWindow, Occurrence};
use super::rules::occurs;
use crate::goals::GoalDefinition;

/// Expands `goals` over every day of `window`.
///
/// Days are evaluated in parallel; the output is still in days-ascending,
/// goals-in-input order. Goals are never mutated.
pub fn expand(goals: &[GoalDefinition], window: &DateWindow) -> Vec<Occurrence> {
    let days = window.days();

    let occurrences: Vec<Occurrence> = days
        .par_iter()
        .flat_map_iter(|day| {
            goals
                .iter()
                .filter(move |goal| occurs(goal, *day, window))
                .map(move |goal| Occurrence::of(goal, *day))
        })
        .collect();

    debug!(
        "Expanded {} goals over {} days into {} occurrences",
        goals.len(),
        days.len(),
        occurrences.len()
    );
    occurrences
}
