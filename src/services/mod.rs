//! Business logic layer
//!
//! Pure computations over the caller's goals and budget items.

pub mod progress;

pub use progress::{calculate_progress, counts_toward, GoalProgress};
