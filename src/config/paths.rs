//! Path resolution for ghstreak configuration files.
//!
//! All ghstreak data is stored in `~/.ghstreak/`:
//! - `config.yaml` - Main configuration file
//! - `snapshots/` - Suggested home for exported snapshot JSON files

use std::path::PathBuf;

use crate::error::GhStreakError;

/// Paths to ghstreak configuration and data directories.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.ghstreak/`
    pub root: PathBuf,
    /// Config file: `~/.ghstreak/config.yaml`
    pub config_file: PathBuf,
    /// Snapshots directory: `~/.ghstreak/snapshots/`
    pub snapshots: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, GhStreakError> {
        let home = std::env::var("HOME").map_err(|_| {
            GhStreakError::Config("Could not determine home directory".to_string())
        })?;

        let root = PathBuf::from(home).join(".ghstreak");

        Ok(Self {
            config_file: root.join("config.yaml"),
            snapshots: root.join("snapshots"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            snapshots: root.join("snapshots"),
            root,
        }
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), GhStreakError> {
        for dir in [&self.root, &self.snapshots] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    GhStreakError::Config(format!("Failed to create directory {:?}: {}", dir, e))
                })?;
            }
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".ghstreak"))
        })
    }
}
