//! Display formatting for terminal output

pub mod goal;

pub use goal::{format_amount, format_goal_details, format_goal_list, progress_bar};
