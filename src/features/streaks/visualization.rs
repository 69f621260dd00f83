//! Terminal visualization for contribution data.
//!
//! ASCII charts over a contribution day sequence. Everything here anchors on
//! the window's own last date, never wall-clock time, so a stale calendar
//! renders as-is instead of drifting against "now".

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashMap;

use crate::github::ContributionDay;

/// Characters for bar chart rendering.
const BAR_CHARS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];
const FULL_BLOCK: char = '█';

/// Render a horizontal bar chart from (label, value) pairs.
#[must_use]
pub fn render_bar_chart(data: &[(String, u32)], max_label_width: usize, bar_width: usize) -> String {
    if data.is_empty() {
        return String::new();
    }

    let max_value = data.iter().map(|(_, v)| *v).max().unwrap_or(1).max(1);
    let mut lines = Vec::new();

    for (label, value) in data {
        let truncated_label = if label.len() > max_label_width {
            format!("{}...", &label[..max_label_width - 3])
        } else {
            format!("{:width$}", label, width = max_label_width)
        };

        let bar_length = (f64::from(*value) / f64::from(max_value) * bar_width as f64) as usize;
        let bar = FULL_BLOCK.to_string().repeat(bar_length);
        let padding = " ".repeat(bar_width - bar_length);

        lines.push(format!("{} |{}{} {}", truncated_label, bar, padding, value));
    }

    lines.join("\n")
}

/// Render a sparkline (compact inline chart).
#[must_use]
pub fn render_sparkline(values: &[u32]) -> String {
    if values.is_empty() {
        return String::new();
    }

    let max_value = values.iter().max().copied().unwrap_or(1).max(1);

    values
        .iter()
        .map(|&v| {
            let normalized = (f64::from(v) / f64::from(max_value) * 7.0) as usize;
            if v == 0 {
                BAR_CHARS[0]
            } else {
                BAR_CHARS[normalized.min(7)]
            }
        })
        .collect()
}

/// Render a contribution heatmap over the last `weeks` weeks of the window.
///
/// Shows one row per weekday with intensity scaled to the window's peak day.
#[must_use]
pub fn render_heatmap(days: &[ContributionDay], weeks: usize) -> String {
    let Some(last) = days.last() else {
        return "No contribution data.".to_string();
    };
    let anchor = last.date;
    let span = weeks * 7;
    let start_date = anchor - Duration::days(span as i64 - 1);

    let mut by_date: HashMap<NaiveDate, u32> = HashMap::new();
    for day in days {
        if day.date >= start_date && day.date <= anchor {
            by_date.insert(day.date, day.contribution_count);
        }
    }

    let max_count = by_date.values().max().copied().unwrap_or(1).max(1);

    let mut lines = Vec::new();
    let day_labels = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

    // Header with week numbers
    let mut header = "     ".to_string();
    for w in 0..weeks {
        header.push_str(&format!("W{:<2}", weeks - w));
    }
    lines.push(header);

    // Each row is a day of the week
    for (day_idx, label) in day_labels.iter().enumerate() {
        let mut row = format!("{} ", label);

        for week in (0..weeks).rev() {
            let days_back = week * 7 + (6 - day_idx);
            let date = anchor - Duration::days(days_back as i64);

            // Cells outside the weekday column stay blank
            let weekday = date.weekday().num_days_from_monday() as usize;
            if weekday != day_idx {
                row.push_str("   ");
                continue;
            }

            let count = by_date.get(&date).copied().unwrap_or(0);
            let intensity = if count == 0 {
                '·'
            } else {
                let level = (f64::from(count) / f64::from(max_count) * 4.0) as usize;
                match level {
                    0 => '░',
                    1 => '▒',
                    2 => '▓',
                    _ => '█',
                }
            };
            row.push_str(&format!(" {} ", intensity));
        }

        lines.push(row);
    }

    lines.push(String::new());
    lines.push("Legend: · = 0  ░ = low  ▒ = medium  ▓ = high  █ = peak".to_string());

    lines.join("\n")
}
