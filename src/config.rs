//! Application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::journal::CompanionKind;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Journaling settings
    pub journal: JournalSettings,
    /// Companion settings
    pub companion: CompanionSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            journal: JournalSettings::default(),
            companion: CompanionSettings::default(),
        }
    }
}

/// Journaling-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalSettings {
    /// Look-back window in days for the companion-mood sample
    pub mood_window_days: i64,
    /// How many near-complete achievements to surface
    pub upcoming_limit: usize,
    /// Analytics default window in days
    pub analytics_window_days: i64,
}

impl Default for JournalSettings {
    fn default() -> Self {
        Self {
            mood_window_days: crate::progress::DEFAULT_MOOD_WINDOW_DAYS,
            upcoming_limit: 3,
            analytics_window_days: 30,
        }
    }
}

/// Companion-related settings.
///
/// The companion-level formula is an invariant of the progression engine
/// and is deliberately not configurable here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanionSettings {
    /// Companion display name
    pub name: String,
    /// Companion kind
    pub kind: CompanionKind,
}

impl Default for CompanionSettings {
    fn default() -> Self {
        Self {
            name: "Buddy".to_string(),
            kind: CompanionKind::Cat,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "moodnest", "MoodNest")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Get the journal database path.
pub fn get_database_path() -> PathBuf {
    get_data_dir().join("moodnest.db")
}

/// Load application configuration from file.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = get_config_path();

    if !path.exists() {
        let config = AppConfig {
            data_dir: get_data_dir(),
            ..Default::default()
        };
        return Ok(config);
    }

    let content =
        std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = get_data_dir();

    Ok(config)
}

/// Save application configuration to file.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = get_config_path();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.journal.mood_window_days, 7);
        assert_eq!(config.journal.upcoming_limit, 3);
        assert_eq!(config.companion.name, "Buddy");
        assert_eq!(config.companion.kind, CompanionKind::Cat);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.journal.mood_window_days = 14;
        config.companion.name = "Mochi".to_string();
        config.companion.kind = CompanionKind::Bunny;

        let content = toml::to_string_pretty(&config).unwrap();
        let back: AppConfig = toml::from_str(&content).unwrap();

        assert_eq!(back.journal.mood_window_days, 14);
        assert_eq!(back.companion.name, "Mochi");
        assert_eq!(back.companion.kind, CompanionKind::Bunny);
    }

    #[test]
    fn test_parse_config_file() {
        let config: Result<AppConfig, _> = toml::from_str(
            r#"
            version = "0.1.0"

            [journal]
            mood_window_days = 3
            upcoming_limit = 5
            analytics_window_days = 30

            [companion]
            name = "Fern"
            kind = "plant"
            "#,
        );

        let config = config.unwrap();
        assert_eq!(config.journal.mood_window_days, 3);
        assert_eq!(config.companion.kind, CompanionKind::Plant);
    }
}
