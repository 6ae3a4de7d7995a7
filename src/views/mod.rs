//! Screen models for the savings goals feature

pub mod goals;

pub use goals::{GoalCard, SavingsGoalsView};
