//! Command implementations for ghstreak.
//!
//! Each command loads a snapshot through the [`SnapshotSource`] seam,
//! computes its statistics, and formats the result per the output format.

mod viz;

pub use viz::{heatmap, trends};

use std::io::Write;
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::GhStreakError;
use crate::features::languages::top_languages;
use crate::features::streaks::analyze;
use crate::features::summary::ProfileSummary;
use crate::github::{JsonSnapshotSource, Snapshot, SnapshotSource};
use crate::output::{format_languages, format_streaks, format_summary};

/// Resolve the snapshot source for a command: explicit path, then the
/// configured default, then stdin.
fn source_for(snapshot: Option<PathBuf>, config: &Config) -> JsonSnapshotSource {
    let path = snapshot.or_else(|| config.general.default_snapshot.clone());
    JsonSnapshotSource::new(path)
}

fn load(snapshot: Option<PathBuf>, config: &Config) -> Result<Snapshot, GhStreakError> {
    source_for(snapshot, config).load()
}

/// Execute the streaks command
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded or output formatting
/// fails. A snapshot without a calendar yields all-zero stats, not an error.
pub fn streaks(
    snapshot: Option<PathBuf>,
    config: &Config,
    format: OutputFormat,
) -> Result<String, GhStreakError> {
    let snapshot = load(snapshot, config)?;
    let stats = analyze(&snapshot.calendar_days());
    format_streaks(&stats, format)
}

/// Execute the summary command
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded, has no profile
/// section, or output formatting fails.
pub fn summary(
    snapshot: Option<PathBuf>,
    config: &Config,
    format: OutputFormat,
) -> Result<String, GhStreakError> {
    let snapshot = load(snapshot, config)?;
    let summary = ProfileSummary::from_snapshot(&snapshot)?;
    format_summary(&summary, format)
}

/// Execute the languages command
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded or output formatting
/// fails.
pub fn languages(
    snapshot: Option<PathBuf>,
    limit: Option<usize>,
    config: &Config,
    format: OutputFormat,
) -> Result<String, GhStreakError> {
    let snapshot = load(snapshot, config)?;
    let limit = limit.unwrap_or(config.stats.language_limit);
    let languages = top_languages(&snapshot.repos, limit);
    format_languages(&languages, format)
}

/// Execute the completions command
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: &Shell) -> Result<String, GhStreakError> {
    let mut cmd = Cli::command();
    let mut buf: Vec<u8> = Vec::new();
    clap_complete::generate(*shell, &mut cmd, "ghstreak", &mut buf);
    buf.flush()?;
    String::from_utf8(buf)
        .map_err(|e| GhStreakError::Config(format!("completion script was not UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn snapshot_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const CALENDAR: &str = r#"[
        {"date": "2025-06-27", "count": 2},
        {"date": "2025-06-28", "count": 1},
        {"date": "2025-06-29", "count": 1},
        {"date": "2025-06-30", "count": 0}
    ]"#;

    #[test]
    fn test_streaks_from_calendar_file() {
        let file = snapshot_file(CALENDAR);
        let config = Config::default();

        let out = streaks(
            Some(file.path().to_path_buf()),
            &config,
            OutputFormat::Json,
        )
        .unwrap();

        assert!(out.contains("\"currentStreak\": 3"));
        assert!(out.contains("\"maxStreak\": 3"));
        assert!(out.contains("\"totalContributions\": 4"));
    }

    #[test]
    fn test_streaks_uses_configured_default_snapshot() {
        let file = snapshot_file(CALENDAR);
        let mut config = Config::default();
        config.general.default_snapshot = Some(file.path().to_path_buf());

        let out = streaks(None, &config, OutputFormat::Json).unwrap();
        assert!(out.contains("\"maxStreak\": 3"));
    }

    #[test]
    fn test_streaks_missing_file_errors() {
        let config = Config::default();
        let result = streaks(
            Some(PathBuf::from("/nonexistent/snapshot.json")),
            &config,
            OutputFormat::Pretty,
        );
        assert!(matches!(result, Err(GhStreakError::Snapshot(_))));
    }

    #[test]
    fn test_summary_requires_profile_section() {
        let file = snapshot_file(CALENDAR);
        let config = Config::default();

        let result = summary(Some(file.path().to_path_buf()), &config, OutputFormat::Json);
        assert!(matches!(result, Err(GhStreakError::Snapshot(_))));
    }

    #[test]
    fn test_summary_full_snapshot() {
        let file = snapshot_file(
            r#"{
                "profile": {"login": "octocat", "followers": 10},
                "repos": [
                    {"name": "a", "language": "Rust", "stargazerCount": 3},
                    {"name": "b", "language": "Rust", "stargazerCount": 1}
                ],
                "calendar": [{"date": "2025-06-30", "count": 5}]
            }"#,
        );
        let config = Config::default();

        let out = summary(Some(file.path().to_path_buf()), &config, OutputFormat::Json).unwrap();
        assert!(out.contains("\"username\": \"octocat\""));
        assert!(out.contains("\"totalStars\": 4"));
        assert!(out.contains("\"currentStreak\": 1"));
    }

    #[test]
    fn test_languages_limit_from_config() {
        let file = snapshot_file(
            r#"{"repos": [
                {"name": "a", "language": "Rust"},
                {"name": "b", "language": "Go"},
                {"name": "c", "language": "C"}
            ]}"#,
        );
        let mut config = Config::default();
        config.stats.language_limit = 2;

        let out = languages(
            Some(file.path().to_path_buf()),
            None,
            &config,
            OutputFormat::Json,
        )
        .unwrap();
        assert!(out.contains("\"count\": 2"));
    }

    #[test]
    fn test_completions_bash() {
        let script = completions(&Shell::Bash).unwrap();
        assert!(script.contains("ghstreak"));
    }
}
