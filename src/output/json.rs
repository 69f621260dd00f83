//! JSON output formatting for ghstreak.

use serde::Serialize;
use serde_json::json;

use crate::error::GhStreakError;
use crate::features::languages::LanguageMetrics;
use crate::features::streaks::StreakStats;
use crate::features::summary::ProfileSummary;

/// Format streak stats as JSON
///
/// # Errors
///
/// Returns `GhStreakError::Parse` if JSON serialization fails.
pub fn format_streaks_json(stats: &StreakStats) -> Result<String, GhStreakError> {
    Ok(serde_json::to_string_pretty(stats)?)
}

/// Format a profile summary as JSON
///
/// # Errors
///
/// Returns `GhStreakError::Parse` if JSON serialization fails.
pub fn format_summary_json(summary: &ProfileSummary) -> Result<String, GhStreakError> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Format language metrics as JSON
///
/// # Errors
///
/// Returns `GhStreakError::Parse` if JSON serialization fails.
pub fn format_languages_json(languages: &[LanguageMetrics]) -> Result<String, GhStreakError> {
    let output = json!({
        "count": languages.len(),
        "items": languages
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `GhStreakError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, GhStreakError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_streaks_json() {
        let stats = StreakStats {
            current_streak: 3,
            max_streak: 7,
            total_contributions: 120,
        };
        let result = format_streaks_json(&stats).unwrap();

        assert!(result.contains("\"currentStreak\": 3"));
        assert!(result.contains("\"maxStreak\": 7"));
        assert!(result.contains("\"totalContributions\": 120"));
    }

    #[test]
    fn test_format_languages_json_empty() {
        let result = format_languages_json(&[]).unwrap();

        assert!(result.contains("\"count\": 0"));
        assert!(result.contains("\"items\": []"));
    }

    #[test]
    fn test_format_languages_json() {
        let languages = vec![LanguageMetrics {
            name: "Rust".to_string(),
            count: 4,
            color: "#dea584".to_string(),
            percentage: 50.0,
        }];
        let result = format_languages_json(&languages).unwrap();

        assert!(result.contains("\"count\": 1"));
        assert!(result.contains("\"name\": \"Rust\""));
        assert!(result.contains("\"color\": \"#dea584\""));
    }

    #[test]
    fn test_to_json_generic() {
        let stats = StreakStats::default();
        let result = to_json(&stats).unwrap();
        assert!(result.contains("\"currentStreak\": 0"));
    }
}
