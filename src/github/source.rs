//! Snapshot loading.
//!
//! ghstreak consumes GitHub data through the [`SnapshotSource`] seam. The
//! shipped implementation reads a JSON export from a file or stdin; fetching
//! that export (and any retry/auth concerns) belongs to whatever produced it.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::GhStreakError;
use crate::github::types::{ContributionCalendar, Snapshot};

/// Supplies a [`Snapshot`] to the commands.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotSource {
    /// Load the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read or parsed.
    fn load(&self) -> Result<Snapshot, GhStreakError>;
}

/// Reads a snapshot from a JSON file, or stdin when no path is given.
///
/// Accepts either a full snapshot object or a bare contribution calendar
/// (GraphQL weeks object or flat day list); a bare calendar is wrapped into a
/// snapshot with no profile or repos.
#[derive(Debug, Clone, Default)]
pub struct JsonSnapshotSource {
    path: Option<PathBuf>,
}

impl JsonSnapshotSource {
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        // "-" is the conventional spelling for stdin
        let path = path.filter(|p| p != Path::new("-"));
        Self { path }
    }

    fn read_raw(&self) -> Result<String, GhStreakError> {
        match &self.path {
            Some(path) => std::fs::read_to_string(path).map_err(|e| {
                GhStreakError::Snapshot(format!("failed to read {}: {e}", path.display()))
            }),
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
        }
    }

    fn parse(raw: &str) -> Result<Snapshot, GhStreakError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GhStreakError::Snapshot("snapshot input is empty".to_string()));
        }

        // Full snapshot first; a document with none of the snapshot sections
        // is more likely a bare calendar, so retry with that shape.
        if let Ok(snapshot) = serde_json::from_str::<Snapshot>(trimmed) {
            if snapshot.profile.is_some()
                || snapshot.calendar.is_some()
                || !snapshot.repos.is_empty()
            {
                return Ok(snapshot);
            }
        }

        let calendar: ContributionCalendar = serde_json::from_str(trimmed)?;
        Ok(Snapshot {
            calendar: Some(calendar),
            ..Snapshot::default()
        })
    }
}

impl SnapshotSource for JsonSnapshotSource {
    fn load(&self) -> Result<Snapshot, GhStreakError> {
        let raw = self.read_raw()?;
        Self::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_snapshot() {
        let json = r#"{
            "profile": {"login": "octocat"},
            "repos": [{"name": "hello", "language": "C", "stargazerCount": 1}],
            "calendar": [{"date": "2025-06-01", "count": 2}]
        }"#;
        let snapshot = JsonSnapshotSource::parse(json).unwrap();
        assert_eq!(snapshot.profile.as_ref().unwrap().login, "octocat");
        assert_eq!(snapshot.repos.len(), 1);
        assert_eq!(snapshot.calendar_days().len(), 1);
    }

    #[test]
    fn test_parse_bare_flat_calendar() {
        let json = r#"[{"date": "2025-06-01", "count": 2}]"#;
        let snapshot = JsonSnapshotSource::parse(json).unwrap();
        assert!(snapshot.profile.is_none());
        assert_eq!(snapshot.calendar_days().len(), 1);
    }

    #[test]
    fn test_parse_bare_weeks_calendar() {
        let json = r#"{"weeks": [{"contributionDays": [
            {"date": "2025-06-01", "contributionCount": 3}
        ]}]}"#;
        let snapshot = JsonSnapshotSource::parse(json).unwrap();
        assert_eq!(snapshot.calendar_days().len(), 1);
        assert_eq!(snapshot.calendar_days()[0].contribution_count, 3);
    }

    #[test]
    fn test_parse_empty_input() {
        let err = JsonSnapshotSource::parse("   ").unwrap_err();
        assert!(matches!(err, GhStreakError::Snapshot(_)));
    }

    #[test]
    fn test_parse_garbage_input() {
        assert!(JsonSnapshotSource::parse("not json").is_err());
    }

    #[test]
    fn test_missing_file() {
        let source = JsonSnapshotSource::new(Some(PathBuf::from("/nonexistent/snapshot.json")));
        assert!(matches!(source.load(), Err(GhStreakError::Snapshot(_))));
    }

    #[test]
    fn test_dash_means_stdin() {
        let source = JsonSnapshotSource::new(Some(PathBuf::from("-")));
        assert!(source.path.is_none());
    }

    #[test]
    fn test_mock_source() {
        let mut mock = MockSnapshotSource::new();
        mock.expect_load().returning(|| Ok(Snapshot::default()));
        let snapshot = mock.load().unwrap();
        assert!(snapshot.calendar.is_none());
    }
}
