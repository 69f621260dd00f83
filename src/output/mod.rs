//! Output formatting for ghstreak.
//!
//! This module provides formatters for displaying stats in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::GhStreakError;
use crate::features::languages::LanguageMetrics;
use crate::features::streaks::StreakStats;
use crate::features::summary::ProfileSummary;

pub use json::*;
pub use pretty::*;

/// Format streak stats based on output format
///
/// # Errors
///
/// Returns `GhStreakError::Parse` if JSON serialization fails.
pub fn format_streaks(stats: &StreakStats, format: OutputFormat) -> Result<String, GhStreakError> {
    match format {
        OutputFormat::Pretty => Ok(format_streaks_pretty(stats)),
        OutputFormat::Json => format_streaks_json(stats),
    }
}

/// Format a profile summary based on output format
///
/// # Errors
///
/// Returns `GhStreakError::Parse` if JSON serialization fails.
pub fn format_summary(
    summary: &ProfileSummary,
    format: OutputFormat,
) -> Result<String, GhStreakError> {
    match format {
        OutputFormat::Pretty => Ok(format_summary_pretty(summary)),
        OutputFormat::Json => format_summary_json(summary),
    }
}

/// Format language metrics based on output format
///
/// # Errors
///
/// Returns `GhStreakError::Parse` if JSON serialization fails.
pub fn format_languages(
    languages: &[LanguageMetrics],
    format: OutputFormat,
) -> Result<String, GhStreakError> {
    match format {
        OutputFormat::Pretty => Ok(format_languages_pretty(languages)),
        OutputFormat::Json => format_languages_json(languages),
    }
}
