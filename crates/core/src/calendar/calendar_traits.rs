//! Calendar traits.
//!
//! - `ClockTrait` - source of "today" for requests without an explicit date
//! - `CalendarServiceTrait` - operations consumed by the presentation layer

use chrono::{Local, NaiveDate};

use super::calendar_model::MonthView;
use crate::errors::Result;
use crate::goals::GoalScope;
use crate::occurrences::{Occurrence, OccurrencesByDay};

/// Source of the current date.
pub trait ClockTrait: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockTrait for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date (for tests and replays).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl ClockTrait for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Service interface for calendar rendering.
pub trait CalendarServiceTrait: Send + Sync {
    /// Parses a `YYYY-MM-DD` request parameter, defaulting to today.
    fn resolve_target_date(&self, raw: Option<&str>) -> Result<NaiveDate>;

    /// Month grid plus navigation targets for `target_date`.
    fn render_month(&self, target_date: NaiveDate) -> Result<MonthView>;

    /// Occurrences for every day of `[target - offset_left, target + offset_right]`.
    ///
    /// # Errors
    ///
    /// - `Validation` when an offset exceeds the configured maximum or a
    ///   fetched goal is malformed
    /// - `Integrity` when the engine produced an out-of-window occurrence
    fn render_occurrences(
        &self,
        scope: &GoalScope,
        target_date: NaiveDate,
        offset_left: u32,
        offset_right: u32,
    ) -> Result<OccurrencesByDay>;

    /// Occurrences for the month page, using the configured month offset.
    fn render_month_occurrences(
        &self,
        scope: &GoalScope,
        target_date: NaiveDate,
    ) -> Result<OccurrencesByDay>;

    /// Ordered occurrences of a single day.
    fn render_day(&self, scope: &GoalScope, target_date: NaiveDate) -> Result<Vec<Occurrence>>;
}
