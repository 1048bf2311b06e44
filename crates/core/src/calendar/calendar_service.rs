use chrono::NaiveDate;
use log::{debug, error, info, warn};
use std::sync::Arc;

use super::calendar_model::MonthView;
use super::calendar_traits::{CalendarServiceTrait, ClockTrait};
use super::window_builder::{month_grid_with_weekends, offsets_with_sizes};
use crate::errors::{Result, ValidationError};
use crate::goals::{GoalDefinition, GoalRepositoryTrait, GoalScope};
use crate::occurrences::{occurrences_by_day, DateWindow, Occurrence, OccurrencesByDay};
use crate::settings::CalendarSettings;
use crate::utils::time_utils::{date_key, parse_date_key};

pub struct CalendarService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    clock: Arc<dyn ClockTrait>,
    settings: CalendarSettings,
}

impl CalendarService {
    pub fn new(goal_repository: Arc<dyn GoalRepositoryTrait>, clock: Arc<dyn ClockTrait>) -> Self {
        CalendarService {
            goal_repository,
            clock,
            settings: CalendarSettings::default(),
        }
    }

    /// Creates a calendar service with custom settings.
    pub fn with_settings(
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        clock: Arc<dyn ClockTrait>,
        settings: CalendarSettings,
    ) -> Result<Self> {
        settings.validate()?;
        Ok(CalendarService {
            goal_repository,
            clock,
            settings,
        })
    }

    fn checked_window(
        &self,
        target_date: NaiveDate,
        offset_left: u32,
        offset_right: u32,
    ) -> Result<DateWindow> {
        let max = self.settings.max_window_offset;
        let requested = offset_left.max(offset_right);
        if requested > max {
            return Err(ValidationError::WindowTooLarge { requested, max }.into());
        }
        DateWindow::new(target_date, offset_left, offset_right)
    }

    /// Fetches the scope's goals and drops hidden kinds and groups.
    fn load_goals(&self, scope: &GoalScope, window: &DateWindow) -> Result<Vec<GoalDefinition>> {
        let goals = self.goal_repository.fetch_goals(scope, window)?;

        for goal in &goals {
            if let Err(e) = goal.validate() {
                warn!("Rejecting malformed goal {} ({}): {}", goal.id, goal.persistence_kind, e);
                return Err(e);
            }
        }

        Ok(goals
            .into_iter()
            .filter(|goal| !self.settings.hides(goal))
            .collect())
    }
}

impl CalendarServiceTrait for CalendarService {
    fn resolve_target_date(&self, raw: Option<&str>) -> Result<NaiveDate> {
        match raw {
            None => Ok(self.clock.today()),
            Some(value) => parse_date_key(value),
        }
    }

    fn render_month(&self, target_date: NaiveDate) -> Result<MonthView> {
        let grid = month_grid_with_weekends(target_date, &self.settings.weekends)?;
        let navigation =
            offsets_with_sizes(target_date, self.settings.step_size, self.settings.leap_size);
        debug!("Rendered month grid around {}", target_date);
        Ok(MonthView {
            target_date,
            grid,
            navigation,
        })
    }

    fn render_occurrences(
        &self,
        scope: &GoalScope,
        target_date: NaiveDate,
        offset_left: u32,
        offset_right: u32,
    ) -> Result<OccurrencesByDay> {
        let window = self.checked_window(target_date, offset_left, offset_right)?;
        let goals = self.load_goals(scope, &window)?;

        info!(
            "Rendering occurrences of {} goals for {:?} in {}..={}",
            goals.len(),
            scope,
            window.start(),
            window.end()
        );

        occurrences_by_day(&goals, &window).map_err(|e| {
            if e.is_integrity() {
                error!(
                    "Failed to build calendar for {:?} (target={}, window={}..={}): {}",
                    scope,
                    target_date,
                    window.start(),
                    window.end(),
                    e
                );
            }
            e
        })
    }

    fn render_month_occurrences(
        &self,
        scope: &GoalScope,
        target_date: NaiveDate,
    ) -> Result<OccurrencesByDay> {
        let offset = self.settings.month_offset;
        self.render_occurrences(scope, target_date, offset, offset)
    }

    fn render_day(&self, scope: &GoalScope, target_date: NaiveDate) -> Result<Vec<Occurrence>> {
        let mut by_day = self.render_occurrences(scope, target_date, 0, 0)?;
        Ok(by_day.remove(&date_key(target_date)).unwrap_or_default())
    }
}
