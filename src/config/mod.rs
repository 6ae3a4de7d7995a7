//! Configuration module for savings-goals
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SavingsPaths;
pub use settings::Settings;
