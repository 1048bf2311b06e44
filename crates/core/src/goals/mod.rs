//! Goals module - domain models, storage contract, and an in-memory store.

mod goals_model;
mod goals_traits;
mod in_memory_repository;

pub use goals_model::{GoalDefinition, GoalPayload, GoalScope, NewGoal, PersistenceKind};
pub use goals_traits::GoalRepositoryTrait;
pub use in_memory_repository::InMemoryGoalRepository;
