//! savings-goals - progress tracking and authoring for savings goals
//!
//! Savings goals are targets linked to a savings category of a personal
//! budget. This crate derives each goal's progress from the budget's saving
//! items and manages the form used to create and edit goals. It never stores
//! anything: user actions come back to the caller as [`intent::GoalIntent`]s.
//!
//! # Architecture
//!
//! - `models`: goals, categories and budget items
//! - `services`: progress calculation
//! - `forms`: goal form state and submission
//! - `views`: the goals dashboard
//! - `display`: terminal formatting
//! - `config`: paths and user settings
//! - `snapshot`: JSON input for the command-line front end
//! - `cli`: command handlers
//!
//! # Example
//!
//! ```
//! use savings_goals::models::{BudgetItem, GoalDraft, SavingsGoal};
//! use savings_goals::services::calculate_progress;
//!
//! let goal = SavingsGoal::new(GoalDraft {
//!     name: "Vacation".into(),
//!     target_amount: 1000.0,
//!     initial_amount: 200.0,
//!     deadline: None,
//!     category: "Vacation".into(),
//!     sub_category: None,
//!     color: "#10B981".into(),
//! });
//! let items = vec![BudgetItem::saving("Vacation", 300.0)];
//!
//! let progress = calculate_progress(&goal, &items);
//! assert_eq!(progress.percentage, 50.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod forms;
pub mod intent;
pub mod models;
pub mod services;
pub mod snapshot;
pub mod views;

pub use error::{SavingsError, SavingsResult};
