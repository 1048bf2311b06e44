//! Occurrence domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{Error, Result, ValidationError};
use crate::goals::{GoalDefinition, GoalPayload, PersistenceKind};
use crate::utils::time_utils::{get_days_between, shift_days};

/// Inclusive range of days evaluated around a target date.
///
/// Invariant: `start <= target_date <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawDateWindow")]
pub struct DateWindow {
    target_date: NaiveDate,
    offset_left: u32,
    offset_right: u32,
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    pub fn new(target_date: NaiveDate, offset_left: u32, offset_right: u32) -> Result<Self> {
        let start = shift_days(target_date, -i64::from(offset_left))?;
        let end = shift_days(target_date, i64::from(offset_right))?;
        Ok(DateWindow {
            target_date,
            offset_left,
            offset_right,
            start,
            end,
        })
    }

    /// Window with the same offset on both sides.
    pub fn symmetric(target_date: NaiveDate, offset: u32) -> Result<Self> {
        Self::new(target_date, offset, offset)
    }

    pub fn target_date(&self) -> NaiveDate {
        self.target_date
    }

    pub fn offset_left(&self) -> u32 {
        self.offset_left
    }

    pub fn offset_right(&self) -> u32 {
        self.offset_right
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days in the window, both ends included.
    pub fn len(&self) -> usize {
        self.offset_left as usize + self.offset_right as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Every day of the window in ascending order.
    pub fn days(&self) -> Vec<NaiveDate> {
        get_days_between(self.start, self.end)
    }
}

/// Wire form of a window. The bounds are recomputed from the offsets and
/// must agree with them when present.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDateWindow {
    target_date: NaiveDate,
    offset_left: u32,
    offset_right: u32,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl TryFrom<RawDateWindow> for DateWindow {
    type Error = Error;

    fn try_from(raw: RawDateWindow) -> Result<Self> {
        let window = DateWindow::new(raw.target_date, raw.offset_left, raw.offset_right)?;
        let start_matches = raw.start.map_or(true, |start| start == window.start);
        let end_matches = raw.end.map_or(true, |end| end == window.end);
        if !(start_matches && end_matches) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Window bounds do not match target {} with offsets -{}/+{}",
                raw.target_date, raw.offset_left, raw.offset_right
            ))));
        }
        Ok(window)
    }
}

/// One goal materializing on one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub goal_id: String,
    pub occurrence_date: NaiveDate,
    pub persistence_kind: PersistenceKind,
    pub payload: GoalPayload,
}

impl Occurrence {
    pub fn of(goal: &GoalDefinition, occurrence_date: NaiveDate) -> Self {
        Occurrence {
            goal_id: goal.id.clone(),
            occurrence_date,
            persistence_kind: goal.persistence_kind,
            payload: goal.payload.clone(),
        }
    }
}

/// Organized occurrences keyed by `YYYY-MM-DD`, one entry per window day.
pub type OccurrencesByDay = BTreeMap<String, Vec<Occurrence>>;
