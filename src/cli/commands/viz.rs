//! Heatmap and trends commands.

use std::collections::BTreeMap;
use std::path::PathBuf;

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::GhStreakError;
use crate::features::streaks::{render_bar_chart, render_heatmap, render_sparkline};
use crate::github::{ContributionDay, JsonSnapshotSource, SnapshotSource};
use crate::output::to_json;

fn calendar_days(
    snapshot: Option<PathBuf>,
    config: &Config,
) -> Result<Vec<ContributionDay>, GhStreakError> {
    let path = snapshot.or_else(|| config.general.default_snapshot.clone());
    let snapshot = JsonSnapshotSource::new(path).load()?;
    Ok(snapshot.calendar_days())
}

/// Execute the heatmap command
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded or output formatting
/// fails.
pub fn heatmap(
    snapshot: Option<PathBuf>,
    weeks: Option<usize>,
    config: &Config,
    format: OutputFormat,
) -> Result<String, GhStreakError> {
    let days = calendar_days(snapshot, config)?;
    let weeks = weeks.unwrap_or(config.stats.heatmap_weeks);

    match format {
        OutputFormat::Json => {
            // For JSON, return the raw counts for the window
            let tail = trailing_days(&days, weeks * 7);
            let by_date: BTreeMap<String, u32> = tail
                .iter()
                .map(|d| (d.date.to_string(), d.contribution_count))
                .collect();
            to_json(&by_date)
        }
        OutputFormat::Pretty => {
            let mut output = Vec::new();

            output.push(
                format!("📅 Contribution Heatmap (Last {} weeks)", weeks)
                    .bold()
                    .to_string(),
            );
            output.push("═".repeat(50));
            output.push(String::new());
            output.push(render_heatmap(&days, weeks));

            Ok(output.join("\n"))
        }
    }
}

/// Execute the trends command
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded or output formatting
/// fails.
pub fn trends(
    snapshot: Option<PathBuf>,
    days: Option<usize>,
    config: &Config,
    format: OutputFormat,
) -> Result<String, GhStreakError> {
    let window = calendar_days(snapshot, config)?;
    let days = days.unwrap_or(config.stats.trend_days);
    let tail = trailing_days(&window, days);

    match format {
        OutputFormat::Json => to_json(&tail),
        OutputFormat::Pretty => {
            let mut output = Vec::new();

            output.push(
                format!("📈 Contribution Trends (Last {} days)", days)
                    .bold()
                    .to_string(),
            );
            output.push("═".repeat(50));
            output.push(String::new());

            if tail.is_empty() {
                output.push("No contribution data.".dimmed().to_string());
                return Ok(output.join("\n"));
            }

            let values: Vec<u32> = tail.iter().map(|d| d.contribution_count).collect();
            output.push(format!("Daily contributions: {}", render_sparkline(&values)));
            output.push(String::new());

            // Bar chart for the last 14 days (or fewer)
            let chart_days = tail.len().min(14);
            let recent: Vec<(String, u32)> = tail[tail.len() - chart_days..]
                .iter()
                .map(|d| (d.date.format("%m/%d").to_string(), d.contribution_count))
                .collect();

            output.push("Recent days:".to_string());
            output.push(render_bar_chart(&recent, 5, 30));

            let total: u64 = values.iter().map(|&v| u64::from(v)).sum();
            let avg = total as f64 / tail.len() as f64;
            let peak = values.iter().max().copied().unwrap_or(0);

            output.push(String::new());
            output.push(format!(
                "Total: {}  Average: {:.1}/day  Peak: {}",
                total, avg, peak
            ));

            Ok(output.join("\n"))
        }
    }
}

/// The last `n` days of the window, fewer when the window is shorter.
fn trailing_days(days: &[ContributionDay], n: usize) -> Vec<ContributionDay> {
    let start = days.len().saturating_sub(n);
    days[start..].to_vec()
}
