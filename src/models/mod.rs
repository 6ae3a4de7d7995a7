//! Core data models for savings-goals
//!
//! This module contains the data structures the goal views work over:
//! categories, budget items and savings goals.

pub mod category;
pub mod goal;
pub mod ids;
pub mod transaction;

pub use category::{savings_categories, Category, CategoryValidationError};
pub use goal::{color_name, resolve_color, GoalDraft, GoalValidationError, SavingsGoal, GOAL_COLORS};
pub use ids::{CategoryId, GoalId};
pub use transaction::{BudgetItem, TransactionType};
