//! Path management for savings-goals
//!
//! ## Path Resolution Order
//!
//! 1. `SAVINGS_GOALS_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/savings-goals` or `~/.config/savings-goals`
//! 3. Windows: `%APPDATA%\savings-goals`

use std::path::PathBuf;

use crate::error::SavingsError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "SAVINGS_GOALS_DIR";

/// Manages all paths used by savings-goals
#[derive(Debug, Clone)]
pub struct SavingsPaths {
    base_dir: PathBuf,
}

impl SavingsPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SavingsError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SavingsPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Snapshot read when no `--data` file is given
    pub fn default_snapshot_file(&self) -> PathBuf {
        self.base_dir.join("goals.json")
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SavingsError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                SavingsError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("savings-goals"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SavingsError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SavingsError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("savings-goals"))
}
