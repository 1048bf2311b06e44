//! Goals domain models.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, IntegrityError, Result, ValidationError};

/// Recurrence rule attached to a goal.
///
/// The declaration order is significant: occurrences of one day are
/// ordered by kind, so `Once` items come first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PersistenceKind {
    Once,
    UntilComplete,
    EveryDay,
    EveryWeek,
    EveryOddWeek,
    EveryEvenWeek,
    FirstDayOfMonth,
    LastDayOfMonth,
    EveryMonth,
    EveryYear,
}

impl PersistenceKind {
    pub const ALL: [PersistenceKind; 10] = [
        PersistenceKind::Once,
        PersistenceKind::UntilComplete,
        PersistenceKind::EveryDay,
        PersistenceKind::EveryWeek,
        PersistenceKind::EveryOddWeek,
        PersistenceKind::EveryEvenWeek,
        PersistenceKind::FirstDayOfMonth,
        PersistenceKind::LastDayOfMonth,
        PersistenceKind::EveryMonth,
        PersistenceKind::EveryYear,
    ];

    /// Storage id of the kind.
    ///
    /// Ids are persisted and do not follow the declaration order: the
    /// month-boundary kinds take 9 and 10.
    pub fn id(&self) -> i32 {
        match self {
            PersistenceKind::Once => 1,
            PersistenceKind::UntilComplete => 2,
            PersistenceKind::EveryDay => 3,
            PersistenceKind::EveryWeek => 4,
            PersistenceKind::EveryOddWeek => 5,
            PersistenceKind::EveryEvenWeek => 6,
            PersistenceKind::FirstDayOfMonth => 9,
            PersistenceKind::LastDayOfMonth => 10,
            PersistenceKind::EveryMonth => 7,
            PersistenceKind::EveryYear => 8,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PersistenceKind::Once => "ONCE",
            PersistenceKind::UntilComplete => "UNTIL_COMPLETE",
            PersistenceKind::EveryDay => "EVERY_DAY",
            PersistenceKind::EveryWeek => "EVERY_WEEK",
            PersistenceKind::EveryOddWeek => "EVERY_ODD_WEEK",
            PersistenceKind::EveryEvenWeek => "EVERY_EVEN_WEEK",
            PersistenceKind::FirstDayOfMonth => "FIRST_DAY_OF_MONTH",
            PersistenceKind::LastDayOfMonth => "LAST_DAY_OF_MONTH",
            PersistenceKind::EveryMonth => "EVERY_MONTH",
            PersistenceKind::EveryYear => "EVERY_YEAR",
        }
    }

    /// Kinds whose active range is bounded by `start_date`.
    pub fn requires_start_date(&self) -> bool {
        matches!(
            self,
            PersistenceKind::UntilComplete | PersistenceKind::EveryDay
        )
    }
}

impl TryFrom<i32> for PersistenceKind {
    type Error = Error;

    fn try_from(id: i32) -> Result<Self> {
        PersistenceKind::ALL
            .into_iter()
            .find(|kind| kind.id() == id)
            .ok_or_else(|| IntegrityError::UnknownPersistenceKind(id).into())
    }
}

impl FromStr for PersistenceKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PersistenceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown persistence kind: {}", s))
    }
}

impl fmt::Display for PersistenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Visibility scope a goal collection is fetched for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "id")]
pub enum GoalScope {
    User(String),
    Group(String),
}

/// Opaque goal content, carried through the engine untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalPayload {
    pub title: String,
    pub description: String,
    pub target_time: Option<NaiveTime>,
    pub metric_name: String,
    pub metric_objective: f64,
    pub metric_step: f64,
}

/// Domain model representing a stored goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalDefinition {
    pub id: String,
    pub user_id: String,
    pub group_id: Option<String>,
    pub persistence_kind: PersistenceKind,
    pub anchor_date: NaiveDate,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub payload: GoalPayload,
}

impl GoalDefinition {
    /// Returns true when the goal is visible within `scope`.
    pub fn is_visible_in(&self, scope: &GoalScope) -> bool {
        match scope {
            GoalScope::User(user_id) => &self.user_id == user_id,
            GoalScope::Group(group_id) => self.group_id.as_ref() == Some(group_id),
        }
    }

    /// Checks the structural invariants the rule evaluator relies on.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        validate_range(self.persistence_kind, self.start_date, self.end_date)
    }
}

/// Input model for creating a new goal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub id: Option<String>,
    pub user_id: String,
    pub group_id: Option<String>,
    pub persistence_kind: PersistenceKind,
    pub anchor_date: NaiveDate,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub payload: GoalPayload,
}

impl NewGoal {
    /// Validates the new goal data.
    pub fn validate(&self) -> Result<()> {
        if self.payload.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal title cannot be empty".to_string(),
            )));
        }
        if self.user_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "userId".to_string(),
            )));
        }
        validate_range(self.persistence_kind, self.start_date, self.end_date)
    }

    /// Turns the input into a stored definition with the given id.
    pub fn into_definition(self, id: String) -> GoalDefinition {
        GoalDefinition {
            id,
            user_id: self.user_id,
            group_id: self.group_id,
            persistence_kind: self.persistence_kind,
            anchor_date: self.anchor_date,
            start_date: self.start_date,
            end_date: self.end_date,
            payload: self.payload,
        }
    }
}

fn validate_range(
    kind: PersistenceKind,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<()> {
    if kind.requires_start_date() && start_date.is_none() {
        return Err(Error::Validation(ValidationError::MissingField(format!(
            "startDate (required for {})",
            kind
        ))));
    }
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end < start {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "End date {} is before start date {}",
                end, start
            ))));
        }
    }
    Ok(())
}
