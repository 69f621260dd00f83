//! Error types for ghstreak.

use thiserror::Error;

/// Errors that can occur while loading snapshots or formatting output.
///
/// The streak analyzer itself never fails; any `ContributionDay` sequence,
/// including an empty one, produces a definite result. Errors here belong to
/// the I/O layer around it.
#[derive(Error, Debug)]
pub enum GhStreakError {
    /// I/O failure reading a snapshot or config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse or serialization failure.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration file problem.
    #[error("configuration error: {0}")]
    Config(String),

    /// The snapshot was readable but missing a required section.
    #[error("snapshot error: {0}")]
    Snapshot(String),
}
