//! Process-local goal store.
//!
//! Keeps goals in insertion order, which is also the order in which they are
//! handed to the expander.

use async_trait::async_trait;
use log::debug;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use super::goals_model::{GoalDefinition, GoalScope, NewGoal};
use super::goals_traits::GoalRepositoryTrait;
use crate::errors::{Error, Result};
use crate::occurrences::DateWindow;

#[derive(Default)]
pub struct InMemoryGoalRepository {
    goals: RwLock<Vec<GoalDefinition>>,
}

impl InMemoryGoalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with already validated definitions.
    pub fn with_goals(goals: Vec<GoalDefinition>) -> Result<Self> {
        for goal in &goals {
            goal.validate()?;
        }
        Ok(InMemoryGoalRepository {
            goals: RwLock::new(goals),
        })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<GoalDefinition>>> {
        self.goals
            .read()
            .map_err(|e| Error::Repository(format!("Goal store lock poisoned: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<GoalDefinition>>> {
        self.goals
            .write()
            .map_err(|e| Error::Repository(format!("Goal store lock poisoned: {}", e)))
    }
}

#[async_trait]
impl GoalRepositoryTrait for InMemoryGoalRepository {
    fn fetch_goals(&self, scope: &GoalScope, window: &DateWindow) -> Result<Vec<GoalDefinition>> {
        let goals = self.read()?;
        let visible: Vec<GoalDefinition> = goals
            .iter()
            .filter(|goal| goal.is_visible_in(scope))
            .cloned()
            .collect();
        debug!(
            "Fetched {} of {} goals for {:?} in window {}..={}",
            visible.len(),
            goals.len(),
            scope,
            window.start(),
            window.end()
        );
        Ok(visible)
    }

    fn get_goal(&self, goal_id: &str) -> Result<Option<GoalDefinition>> {
        let goals = self.read()?;
        Ok(goals.iter().find(|goal| goal.id == goal_id).cloned())
    }

    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<GoalDefinition> {
        new_goal.validate()?;
        let id = new_goal
            .id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let mut goals = self.write()?;
        if goals.iter().any(|goal| goal.id == id) {
            return Err(Error::Repository(format!("Goal {} already exists", id)));
        }
        let goal = new_goal.into_definition(id);
        goals.push(goal.clone());
        Ok(goal)
    }

    async fn update_goal(&self, goal_update: GoalDefinition) -> Result<GoalDefinition> {
        goal_update.validate()?;
        let mut goals = self.write()?;
        let slot = goals
            .iter_mut()
            .find(|goal| goal.id == goal_update.id)
            .ok_or_else(|| Error::Repository(format!("Goal {} not found", goal_update.id)))?;
        *slot = goal_update.clone();
        Ok(goal_update)
    }

    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize> {
        let mut goals = self.write()?;
        let before = goals.len();
        goals.retain(|goal| goal.id != goal_id_to_delete);
        Ok(before - goals.len())
    }
}
