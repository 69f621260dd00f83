use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Contributions recorded on a single calendar day.
///
/// Matches the GitHub GraphQL `contributionDays` entries; `count` is accepted
/// as an alias for snapshots produced by other tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    pub date: NaiveDate,
    #[serde(alias = "count")]
    pub contribution_count: u32,
}

impl ContributionDay {
    #[must_use]
    pub const fn new(date: NaiveDate, contribution_count: u32) -> Self {
        Self {
            date,
            contribution_count,
        }
    }
}

/// One week of the GraphQL contribution calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    #[serde(default)]
    pub contribution_days: Vec<ContributionDay>,
}

/// A contribution calendar in either of the two shapes found in exports.
///
/// The GraphQL API groups days into weeks; flat exports list days directly.
/// Either way the days are ordered oldest first and gapless, as furnished by
/// the source. Callers must ensure the final day is the current day; a stale
/// calendar makes the current-streak result meaningless.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContributionCalendar {
    /// GraphQL shape: `{ "weeks": [ { "contributionDays": [...] } ] }`.
    Weeks { weeks: Vec<ContributionWeek> },
    /// Flat list of days, oldest first.
    Flat(Vec<ContributionDay>),
}

impl ContributionCalendar {
    /// Flatten the calendar into a single ordered day sequence.
    #[must_use]
    pub fn days(&self) -> Vec<ContributionDay> {
        match self {
            Self::Weeks { weeks } => weeks
                .iter()
                .flat_map(|w| w.contribution_days.iter().cloned())
                .collect(),
            Self::Flat(days) => days.clone(),
        }
    }

    /// Number of days in the calendar.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Weeks { weeks } => weeks.iter().map(|w| w.contribution_days.len()).sum(),
            Self::Flat(days) => days.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A repository owned by the profile user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repo {
    pub name: String,
    /// Primary language, if GitHub detected one.
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, alias = "stargazers_count")]
    pub stargazer_count: u32,
}

/// The user's profile record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    #[serde(default, alias = "public_repos")]
    pub public_repos: u32,
    #[serde(default, alias = "public_gists")]
    pub public_gists: u32,
    #[serde(default, alias = "avatar_url")]
    pub avatar_url: Option<String>,
}

/// A locally exported GitHub snapshot.
///
/// This is the bundle an external fetch step (e.g. `gh api` scripts) writes
/// out; ghstreak itself never talks to the network. Every section is
/// optional so a bare calendar export still works for streak commands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub repos: Vec<Repo>,
    #[serde(default)]
    pub calendar: Option<ContributionCalendar>,
    #[serde(default)]
    pub fetched_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// The ordered day sequence, or an empty one when the snapshot carries no
    /// calendar. Streak stats over an empty sequence are all zero, so the
    /// pipeline proceeds even when the calendar fetch failed upstream.
    #[must_use]
    pub fn calendar_days(&self) -> Vec<ContributionDay> {
        self.calendar.as_ref().map(ContributionCalendar::days).unwrap_or_default()
    }
}
