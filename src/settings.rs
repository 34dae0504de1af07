//! User settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Order in which the move history is listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl HistoryOrder {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "oldest first",
            Self::Descending => "newest first",
        }
    }

    /// Toggles between `Ascending` and `Descending`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// User-configurable settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Where the terminal UI writes its log.
    log_file: PathBuf,

    /// Initial order of the move history.
    history_order: HistoryOrder,

    /// Show the (row, col) of each move next to its history entry.
    show_locations: bool,

    /// Highlight the three squares of a winning line.
    highlight_winner: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("rewind.log"),
            history_order: HistoryOrder::default(),
            show_locations: true,
            highlight_winner: true,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file, falling back to defaults when the
    /// file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No settings file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;
        let settings = Self::from_toml(&content)?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let settings = Settings::from_toml(
            r#"
            history_order = "descending"
            show_locations = false
            "#,
        )
        .unwrap();
        assert_eq!(*settings.history_order(), HistoryOrder::Descending);
        assert!(!*settings.show_locations());
        assert!(*settings.highlight_winner());
        assert_eq!(settings.log_file(), &PathBuf::from("rewind.log"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Settings::from_toml("colour = \"red\"").unwrap_err();
        assert!(err.message.contains("Failed to parse settings"));
    }

    #[test]
    fn test_order_toggle() {
        assert_eq!(HistoryOrder::Ascending.toggle(), HistoryOrder::Descending);
        assert_eq!(HistoryOrder::Descending.toggle(), HistoryOrder::Ascending);
    }
}
