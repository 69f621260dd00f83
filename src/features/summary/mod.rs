//! Profile summary assembly.
//!
//! Combines the profile, repository, and calendar sections of a snapshot
//! into a single statistics record.

use serde::{Deserialize, Serialize};

use crate::error::GhStreakError;
use crate::features::languages::{top_languages, total_stars, LanguageMetrics};
use crate::features::streaks::{analyze, StreakStats};
use crate::github::Snapshot;

/// Aggregate statistics for one user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub username: String,
    pub name: Option<String>,
    pub followers: u32,
    pub following: u32,
    pub public_repos: u32,
    pub public_gists: u32,
    pub total_stars: u64,
    pub top_languages: Vec<LanguageMetrics>,
    pub streaks: StreakStats,
}

/// How many languages the summary carries.
pub const SUMMARY_LANGUAGE_LIMIT: usize = 5;

impl ProfileSummary {
    /// Assemble a summary from a snapshot.
    ///
    /// A snapshot without a calendar still summarizes; the streak stats come
    /// back zeroed so the rest of the record is usable.
    ///
    /// # Errors
    ///
    /// Returns `GhStreakError::Snapshot` if the snapshot has no profile
    /// section.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, GhStreakError> {
        let profile = snapshot.profile.as_ref().ok_or_else(|| {
            GhStreakError::Snapshot("snapshot has no profile section".to_string())
        })?;

        let streaks = snapshot
            .calendar
            .as_ref()
            .map_or_else(StreakStats::default, |calendar| analyze(&calendar.days()));

        Ok(Self {
            username: profile.login.clone(),
            name: profile.name.clone(),
            followers: profile.followers,
            following: profile.following,
            public_repos: profile.public_repos,
            public_gists: profile.public_gists,
            total_stars: total_stars(&snapshot.repos),
            top_languages: top_languages(&snapshot.repos, SUMMARY_LANGUAGE_LIMIT),
            streaks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{ContributionCalendar, ContributionDay, Profile, Repo};
    use chrono::NaiveDate;

    fn profile() -> Profile {
        Profile {
            login: "octocat".to_string(),
            name: Some("The Octocat".to_string()),
            followers: 100,
            following: 9,
            public_repos: 8,
            public_gists: 2,
            avatar_url: None,
        }
    }

    fn calendar(counts: &[u32]) -> ContributionCalendar {
        let end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        ContributionCalendar::Flat(
            counts
                .iter()
                .enumerate()
                .map(|(i, &c)| {
                    let offset = (counts.len() - 1 - i) as i64;
                    ContributionDay::new(end - chrono::Duration::days(offset), c)
                })
                .collect(),
        )
    }

    #[test]
    fn test_summary_from_full_snapshot() {
        let snapshot = Snapshot {
            profile: Some(profile()),
            repos: vec![Repo {
                name: "hello".to_string(),
                language: Some("Rust".to_string()),
                stargazer_count: 12,
            }],
            calendar: Some(calendar(&[1, 1, 0, 2])),
            fetched_at: None,
        };

        let summary = ProfileSummary::from_snapshot(&snapshot).unwrap();
        assert_eq!(summary.username, "octocat");
        assert_eq!(summary.total_stars, 12);
        assert_eq!(summary.top_languages.len(), 1);
        assert_eq!(summary.streaks.current_streak, 1);
        assert_eq!(summary.streaks.max_streak, 2);
        assert_eq!(summary.streaks.total_contributions, 4);
    }

    #[test]
    fn test_summary_without_calendar_zeroes_streaks() {
        let snapshot = Snapshot {
            profile: Some(profile()),
            ..Snapshot::default()
        };

        let summary = ProfileSummary::from_snapshot(&snapshot).unwrap();
        assert_eq!(summary.streaks, StreakStats::default());
        assert_eq!(summary.followers, 100);
    }

    #[test]
    fn test_summary_requires_profile() {
        let snapshot = Snapshot::default();
        let err = ProfileSummary::from_snapshot(&snapshot).unwrap_err();
        assert!(matches!(err, GhStreakError::Snapshot(_)));
    }
}
