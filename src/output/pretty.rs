//! Human-readable output formatting for ghstreak.

use colored::Colorize;

use crate::features::languages::LanguageMetrics;
use crate::features::streaks::{render_bar_chart, StreakStats};
use crate::features::summary::ProfileSummary;

/// Format streak stats for the terminal.
#[must_use]
pub fn format_streaks_pretty(stats: &StreakStats) -> String {
    let mut output = Vec::new();

    output.push("🔥 STREAKS".bold().to_string());
    output.push("─".repeat(40));

    let current = if stats.current_streak > 0 {
        format!("{} days", stats.current_streak).green().to_string()
    } else {
        "0 days".dimmed().to_string()
    };
    output.push(format!("  Current: {}  Longest: {} days", current, stats.max_streak));
    output.push(format!("  Contributions this window: {}", stats.total_contributions));

    output.join("\n")
}

/// Format language metrics as a chart plus table.
#[must_use]
pub fn format_languages_pretty(languages: &[LanguageMetrics]) -> String {
    let mut output = Vec::new();

    output.push("🗣  TOP LANGUAGES".bold().to_string());
    output.push("─".repeat(50));

    if languages.is_empty() {
        output.push("No language data.".dimmed().to_string());
        return output.join("\n");
    }

    let chart_data: Vec<(String, u32)> = languages
        .iter()
        .map(|l| (l.name.clone(), l.count))
        .collect();
    output.push(render_bar_chart(&chart_data, 12, 25));
    output.push(String::new());

    for language in languages {
        output.push(format!(
            "  {:<12} {:>3} repos  {:>5.1}%  {}",
            language.name,
            language.count,
            language.percentage,
            language.color.dimmed()
        ));
    }

    output.join("\n")
}

/// Format the full profile summary.
#[must_use]
pub fn format_summary_pretty(summary: &ProfileSummary) -> String {
    let mut output = Vec::new();

    let display_name = summary.name.clone().unwrap_or_else(|| summary.username.clone());
    output.push(format!("{} (@{})", display_name.bold(), summary.username));
    output.push("═".repeat(50));
    output.push(String::new());

    output.push("👤 PROFILE".bold().to_string());
    output.push("─".repeat(50));
    output.push(format!(
        "  Followers: {}  Following: {}  Repos: {}  Gists: {}",
        summary.followers.to_string().cyan(),
        summary.following,
        summary.public_repos,
        summary.public_gists
    ));
    output.push(format!("  Total stars: {}", summary.total_stars.to_string().yellow()));
    output.push(String::new());

    output.push(format_streaks_pretty(&summary.streaks));
    output.push(String::new());

    output.push(format_languages_pretty(&summary.top_languages));

    output.join("\n")
}
