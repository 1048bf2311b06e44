use crate::errors::Result;
use crate::goals::goals_model::{GoalDefinition, GoalScope, NewGoal};
use crate::occurrences::DateWindow;
use async_trait::async_trait;

/// Trait for goal repository operations
///
/// Implementations return goals already filtered to `scope`; the engine
/// trusts every returned definition to satisfy its invariants.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Loads the goals that may occur inside `window` for `scope`.
    ///
    /// Implementations may return a superset; the rule evaluator decides
    /// which goals actually occur.
    fn fetch_goals(&self, scope: &GoalScope, window: &DateWindow) -> Result<Vec<GoalDefinition>>;
    fn get_goal(&self, goal_id: &str) -> Result<Option<GoalDefinition>>;
    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<GoalDefinition>;
    async fn update_goal(&self, goal_update: GoalDefinition) -> Result<GoalDefinition>;
    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize>;
}
