//! User settings for savings-goals
//!
//! Display preferences and the default snapshot location.

use std::path::PathBuf;

use serde::Deserialize;

use super::paths::SavingsPaths;
use crate::error::SavingsError;

/// User settings for savings-goals
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Snapshot file read when none is given on the command line
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            snapshot_path: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &SavingsPaths) -> Result<Self, SavingsError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SavingsError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| SavingsError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Snapshot to read: the configured one, else the default location
    pub fn snapshot_file(&self, paths: &SavingsPaths) -> PathBuf {
        self.snapshot_path
            .clone()
            .unwrap_or_else(|| paths.default_snapshot_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert!(settings.snapshot_path.is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SavingsPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_load_configured_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SavingsPaths::with_base_dir(temp_dir.path().to_path_buf());

        let contents = serde_json::json!({
            "currency_symbol": "£",
            "snapshot_path": temp_dir.path().join("mine.json"),
        });
        std::fs::write(paths.settings_file(), contents.to_string()).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert_eq!(loaded.snapshot_file(&paths), temp_dir.path().join("mine.json"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SavingsPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol":"kr "}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "kr ");
        assert_eq!(loaded.schema_version, 1);
        assert_eq!(loaded.snapshot_file(&paths), paths.default_snapshot_file());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SavingsPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, SavingsError::Config(_)));
    }
}
