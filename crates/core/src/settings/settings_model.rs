//! Calendar settings model.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LEAP_SIZE, DEFAULT_MAX_WINDOW_OFFSET, DEFAULT_MONTH_OFFSET, DEFAULT_STEP_SIZE,
    DEFAULT_WEEKENDS, WEEK_LENGTH,
};
use crate::errors::{Error, Result, ValidationError};
use crate::goals::{GoalDefinition, PersistenceKind};

/// Tunables for the calendar engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarSettings {
    /// Weekday indexes (0 = Monday) rendered as weekend.
    pub weekends: Vec<u32>,

    /// Days moved by the step back/forward links (default: 7)
    pub step_size: u32,

    /// Days moved by the leap back/forward links (default: 21)
    pub leap_size: u32,

    /// Days listed on each side of the target date on the month page (default: 20)
    pub month_offset: u32,

    /// Largest accepted window offset per side (default: 20)
    pub max_window_offset: u32,

    /// Persistence kinds left out of occurrence listings.
    pub hidden_persistence: Vec<PersistenceKind>,

    /// Group ids whose goals are left out of occurrence listings.
    pub hidden_groups: Vec<String>,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            weekends: DEFAULT_WEEKENDS.to_vec(),
            step_size: DEFAULT_STEP_SIZE,
            leap_size: DEFAULT_LEAP_SIZE,
            month_offset: DEFAULT_MONTH_OFFSET,
            max_window_offset: DEFAULT_MAX_WINDOW_OFFSET,
            hidden_persistence: Vec::new(),
            hidden_groups: Vec::new(),
        }
    }
}

impl CalendarSettings {
    /// Parses settings from JSON; missing keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let settings: CalendarSettings = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(day) = self.weekends.iter().find(|day| **day as usize >= WEEK_LENGTH) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Weekend day index {} is not a weekday (expected 0..=6)",
                day
            ))));
        }
        if self.step_size == 0 || self.leap_size == 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Step and leap sizes must be positive".to_string(),
            )));
        }
        if self.month_offset > self.max_window_offset {
            return Err(Error::Validation(ValidationError::WindowTooLarge {
                requested: self.month_offset,
                max: self.max_window_offset,
            }));
        }
        Ok(())
    }

    pub fn is_hidden(&self, kind: PersistenceKind) -> bool {
        self.hidden_persistence.contains(&kind)
    }

    /// Returns true when the goal's kind or group is hidden.
    pub fn hides(&self, goal: &GoalDefinition) -> bool {
        self.is_hidden(goal.persistence_kind)
            || goal
                .group_id
                .as_ref()
                .is_some_and(|group| self.hidden_groups.contains(group))
    }
}
