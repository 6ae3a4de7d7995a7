//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the goal views.

pub mod goal;

pub use goal::{handle_goal_command, GoalChanges, GoalCommands, OutputOptions};
