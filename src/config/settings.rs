//! Configuration settings for ghstreak.
//!
//! Settings are loaded from `~/.ghstreak/config.yaml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::GhStreakError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Statistics settings.
    pub stats: StatsConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
    /// Snapshot file used when a command gets no path argument.
    #[serde(default)]
    pub default_snapshot: Option<PathBuf>,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Statistics settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Days shown by `trends` when `--days` is absent.
    #[serde(default = "default_trend_days")]
    pub trend_days: usize,
    /// Weeks shown by `heatmap` when `--weeks` is absent.
    #[serde(default = "default_heatmap_weeks")]
    pub heatmap_weeks: usize,
    /// Languages shown by `languages` when `--limit` is absent.
    #[serde(default = "default_language_limit")]
    pub language_limit: usize,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_trend_days() -> usize {
    30
}

const fn default_heatmap_weeks() -> usize {
    8
}

const fn default_language_limit() -> usize {
    5
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
            default_snapshot: None,
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            trend_days: default_trend_days(),
            heatmap_weeks: default_heatmap_weeks(),
            language_limit: default_language_limit(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, GhStreakError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, GhStreakError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            GhStreakError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            GhStreakError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), GhStreakError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), GhStreakError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| GhStreakError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            GhStreakError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert!(config.general.default_snapshot.is_none());
        assert_eq!(config.stats.trend_days, 30);
        assert_eq!(config.stats.heatmap_weeks, 8);
        assert_eq!(config.stats.language_limit, 5);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.stats.trend_days = 90;
        config.general.default_snapshot = Some(PathBuf::from("/tmp/snapshot.json"));

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.stats.trend_days, 90);
        assert_eq!(
            loaded.general.default_snapshot,
            Some(PathBuf::from("/tmp/snapshot.json"))
        );
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r#"
stats:
  heatmap_weeks: 12
"#;
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom value should be loaded
        assert_eq!(config.stats.heatmap_weeks, 12);
        // Defaults should be used for missing fields
        assert_eq!(config.stats.trend_days, 30);
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_bad_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "stats: [not, a, map]").unwrap();

        assert!(matches!(
            Config::load_from_path(&config_path),
            Err(GhStreakError::Config(_))
        ));
    }
}
