//! Language and star aggregation over a repository list.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::colors::color_for;
use crate::github::Repo;

/// Usage of one primary language across the user's repositories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageMetrics {
    pub name: String,
    /// Repositories with this primary language.
    pub count: u32,
    /// Display color (hex).
    pub color: String,
    /// Share of all language-bearing repositories, in percent.
    pub percentage: f64,
}

/// Count primary languages and return the top `limit`, most-used first.
///
/// Repositories without a detected language are excluded from both the
/// counts and the percentage base.
#[must_use]
pub fn top_languages(repos: &[Repo], limit: usize) -> Vec<LanguageMetrics> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    let mut total = 0u32;
    for repo in repos {
        if let Some(language) = &repo.language {
            *counts.entry(language.as_str()).or_default() += 1;
            total += 1;
        }
    }

    let mut entries: Vec<(&str, u32)> = counts.into_iter().collect();
    // Name as tiebreaker keeps the ordering stable across runs
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    entries
        .into_iter()
        .take(limit)
        .map(|(name, count)| LanguageMetrics {
            name: name.to_string(),
            count,
            color: color_for(name).to_string(),
            percentage: if total > 0 {
                f64::from(count) / f64::from(total) * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Sum of stargazer counts across all repositories.
#[must_use]
pub fn total_stars(repos: &[Repo]) -> u64 {
    repos.iter().map(|r| u64::from(r.stargazer_count)).sum()
}
