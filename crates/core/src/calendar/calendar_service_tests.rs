//! Unit tests for the calendar service.

use super::*;
use crate::errors::{Error, Result, ValidationError};
use crate::goals::{
    GoalDefinition, GoalPayload, GoalRepositoryTrait, GoalScope, NewGoal, PersistenceKind,
};
use crate::occurrences::DateWindow;
use crate::settings::CalendarSettings;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Implementations
// ============================================================================

struct MockGoalRepository {
    goals: Vec<GoalDefinition>,
    requested_windows: Mutex<Vec<DateWindow>>,
}

impl MockGoalRepository {
    fn new(goals: Vec<GoalDefinition>) -> Self {
        Self {
            goals,
            requested_windows: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl GoalRepositoryTrait for MockGoalRepository {
    fn fetch_goals(&self, scope: &GoalScope, window: &DateWindow) -> Result<Vec<GoalDefinition>> {
        self.requested_windows.lock().unwrap().push(*window);
        Ok(self
            .goals
            .iter()
            .filter(|g| g.is_visible_in(scope))
            .cloned()
            .collect())
    }

    fn get_goal(&self, goal_id: &str) -> Result<Option<GoalDefinition>> {
        Ok(self.goals.iter().find(|g| g.id == goal_id).cloned())
    }

    async fn insert_new_goal(&self, _new_goal: NewGoal) -> Result<GoalDefinition> {
        unimplemented!()
    }

    async fn update_goal(&self, _goal_update: GoalDefinition) -> Result<GoalDefinition> {
        unimplemented!()
    }

    async fn delete_goal(&self, _goal_id_to_delete: String) -> Result<usize> {
        unimplemented!()
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn goal(id: &str, kind: PersistenceKind, anchor: NaiveDate) -> GoalDefinition {
    GoalDefinition {
        id: id.to_string(),
        user_id: "alice".to_string(),
        group_id: Some("home".to_string()),
        persistence_kind: kind,
        anchor_date: anchor,
        start_date: None,
        end_date: None,
        payload: GoalPayload {
            title: id.to_string(),
            ..Default::default()
        },
    }
}

fn alice() -> GoalScope {
    GoalScope::User("alice".to_string())
}

fn service(goals: Vec<GoalDefinition>) -> CalendarService {
    CalendarService::new(
        Arc::new(MockGoalRepository::new(goals)),
        Arc::new(FixedClock(d(2020, 5, 19))),
    )
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_resolve_target_date_defaults_to_today() {
    let svc = service(Vec::new());
    assert_eq!(svc.resolve_target_date(None).unwrap(), d(2020, 5, 19));
    assert_eq!(
        svc.resolve_target_date(Some("2021-01-31")).unwrap(),
        d(2021, 1, 31)
    );
    assert!(matches!(
        svc.resolve_target_date(Some("31/01/2021")),
        Err(Error::Validation(ValidationError::DateParse(_)))
    ));
}

#[test]
fn test_render_month_combines_grid_and_navigation() {
    let svc = service(Vec::new());
    let view = svc.render_month(d(2020, 5, 4)).unwrap();

    assert_eq!(view.grid.len(), 35);
    assert_eq!(view.grid[0].date, d(2020, 4, 20));
    assert!(view.grid[14].is_today);
    assert_eq!(view.navigation.leap_back, d(2020, 4, 13));
    assert_eq!(view.navigation.step_forward, d(2020, 5, 11));
}

#[test]
fn test_render_month_uses_configured_sizes() {
    let settings = CalendarSettings {
        step_size: 1,
        leap_size: 28,
        weekends: vec![4],
        ..Default::default()
    };
    let svc = CalendarService::with_settings(
        Arc::new(MockGoalRepository::new(Vec::new())),
        Arc::new(FixedClock(d(2020, 5, 19))),
        settings,
    )
    .unwrap();

    let view = svc.render_month(d(2020, 5, 19)).unwrap();
    assert_eq!(view.navigation.step_back, d(2020, 5, 18));
    assert_eq!(view.navigation.leap_forward, d(2020, 6, 16));
    assert!(view.grid.iter().all(|day| day.is_weekend == (day.weekday == 4)));
}

#[test]
fn test_with_settings_rejects_invalid_settings() {
    let settings = CalendarSettings {
        weekends: vec![9],
        ..Default::default()
    };
    assert!(CalendarService::with_settings(
        Arc::new(MockGoalRepository::new(Vec::new())),
        Arc::new(SystemClock),
        settings,
    )
    .is_err());
}

#[test]
fn test_render_occurrences_fills_window_and_sorts() {
    let mut daily = goal("daily", PersistenceKind::EveryDay, d(2020, 5, 1));
    daily.start_date = Some(d(2020, 5, 1));
    let svc = service(vec![
        daily,
        goal("weekly", PersistenceKind::EveryWeek, d(2020, 5, 19)),
        goal("once", PersistenceKind::Once, d(2020, 5, 19)),
    ]);

    let by_day = svc.render_occurrences(&alice(), d(2020, 5, 19), 3, 2).unwrap();
    assert_eq!(by_day.len(), 6);

    let target: Vec<&str> = by_day["2020-05-19"]
        .iter()
        .map(|o| o.goal_id.as_str())
        .collect();
    assert_eq!(target, vec!["once", "daily", "weekly"]);
    assert_eq!(by_day["2020-05-16"].len(), 1);
}

#[test]
fn test_render_occurrences_rejects_oversized_window() {
    let svc = service(Vec::new());
    let err = svc
        .render_occurrences(&alice(), d(2020, 5, 19), 21, 0)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::WindowTooLarge {
            requested: 21,
            max: 20
        })
    ));
}

#[test]
fn test_render_occurrences_rejects_malformed_goal() {
    let svc = service(vec![goal("broken", PersistenceKind::UntilComplete, d(2020, 5, 19))]);
    let err = svc
        .render_occurrences(&alice(), d(2020, 5, 19), 1, 1)
        .unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::MissingField(_))));
    assert!(!err.is_integrity());
}

#[test]
fn test_render_occurrences_respects_scope() {
    let mut other = goal("bob-only", PersistenceKind::Once, d(2020, 5, 19));
    other.user_id = "bob".to_string();
    other.group_id = None;
    let svc = service(vec![goal("shared", PersistenceKind::Once, d(2020, 5, 19)), other]);

    let by_day = svc
        .render_occurrences(&GoalScope::Group("home".to_string()), d(2020, 5, 19), 0, 0)
        .unwrap();
    let ids: Vec<&str> = by_day["2020-05-19"]
        .iter()
        .map(|o| o.goal_id.as_str())
        .collect();
    assert_eq!(ids, vec!["shared"]);
}

#[test]
fn test_hidden_persistence_is_filtered() {
    let settings = CalendarSettings {
        hidden_persistence: vec![PersistenceKind::EveryWeek],
        ..Default::default()
    };
    let svc = CalendarService::with_settings(
        Arc::new(MockGoalRepository::new(vec![
            goal("weekly", PersistenceKind::EveryWeek, d(2020, 5, 19)),
            goal("once", PersistenceKind::Once, d(2020, 5, 19)),
        ])),
        Arc::new(FixedClock(d(2020, 5, 19))),
        settings,
    )
    .unwrap();

    let day = svc.render_day(&alice(), d(2020, 5, 19)).unwrap();
    assert_eq!(day.len(), 1);
    assert_eq!(day[0].goal_id, "once");
}

#[test]
fn test_hidden_groups_are_filtered() {
    let mut private = goal("private", PersistenceKind::Once, d(2020, 5, 19));
    private.group_id = None;
    let mut work = goal("work", PersistenceKind::Once, d(2020, 5, 19));
    work.group_id = Some("work".to_string());

    let settings = CalendarSettings {
        hidden_groups: vec!["home".to_string()],
        ..Default::default()
    };
    let svc = CalendarService::with_settings(
        Arc::new(MockGoalRepository::new(vec![
            goal("shared", PersistenceKind::Once, d(2020, 5, 19)),
            private,
            work,
        ])),
        Arc::new(FixedClock(d(2020, 5, 19))),
        settings,
    )
    .unwrap();

    let ids: Vec<String> = svc
        .render_day(&alice(), d(2020, 5, 19))
        .unwrap()
        .into_iter()
        .map(|o| o.goal_id)
        .collect();
    assert_eq!(ids, vec!["private", "work"]);
}

#[test]
fn test_render_month_occurrences_uses_month_offset() {
    let repo = Arc::new(MockGoalRepository::new(Vec::new()));
    let svc = CalendarService::new(repo.clone(), Arc::new(FixedClock(d(2020, 5, 19))));

    let by_day = svc.render_month_occurrences(&alice(), d(2020, 5, 19)).unwrap();
    assert_eq!(by_day.len(), 41);

    let windows = repo.requested_windows.lock().unwrap();
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].start(), d(2020, 4, 29));
    assert_eq!(windows[0].end(), d(2020, 6, 8));
}

#[test]
fn test_render_day_without_goals_is_empty() {
    let svc = service(Vec::new());
    assert!(svc.render_day(&alice(), d(2020, 5, 19)).unwrap().is_empty());
}
