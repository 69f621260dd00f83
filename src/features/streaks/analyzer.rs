//! Contribution streak analysis.
//!
//! Computes streak statistics over an ordered, gapless sequence of daily
//! contribution counts (oldest first). The sequence's last day is assumed to
//! be the current day; callers own that alignment.

use serde::{Deserialize, Serialize};

use crate::github::ContributionDay;

/// Streak statistics derived from a contribution calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakStats {
    /// Consecutive active days ending at (or adjacent to) the most recent day.
    pub current_streak: u32,
    /// Longest run of consecutive active days anywhere in the window.
    pub max_streak: u32,
    /// Sum of every day's contribution count across the window.
    pub total_contributions: u64,
}

/// Analyze an ordered day sequence into [`StreakStats`].
///
/// Total over any finite input: an empty sequence yields all-zero stats.
///
/// A zero count on the most recent day does not break the current streak;
/// that day may simply not be over yet. A zero anywhere earlier in the
/// backward scan ends the streak immediately.
#[must_use]
pub fn analyze(days: &[ContributionDay]) -> StreakStats {
    let mut max_streak = 0u32;
    let mut run = 0u32;
    let mut total_contributions = 0u64;

    for day in days {
        if day.contribution_count > 0 {
            run += 1;
        } else {
            max_streak = max_streak.max(run);
            run = 0;
        }
        total_contributions += u64::from(day.contribution_count);
    }
    // A streak still open at the end of the window counts too.
    max_streak = max_streak.max(run);

    let mut current_streak = 0u32;
    for (i, day) in days.iter().rev().enumerate() {
        if day.contribution_count > 0 {
            current_streak += 1;
        } else if i == 0 {
            // Today is 0: neutral, keep scanning from yesterday.
            continue;
        } else {
            break;
        }
    }

    StreakStats {
        current_streak,
        max_streak,
        total_contributions,
    }
}
