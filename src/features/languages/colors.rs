//! Display colors for common languages.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Fallback for languages not in the table.
pub const DEFAULT_COLOR: &str = "#ccc";

/// Hex colors GitHub uses for common primary languages.
pub static LANGUAGE_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("TypeScript", "#3178c6"),
        ("JavaScript", "#f1e05a"),
        ("Python", "#3572A5"),
        ("Java", "#b07219"),
        ("Go", "#00ADD8"),
        ("Rust", "#dea584"),
        ("C++", "#f34b7d"),
        ("C", "#555555"),
        ("HTML", "#e34c26"),
        ("CSS", "#563d7c"),
        ("Vue", "#41b883"),
        ("Svelte", "#ff3e00"),
        ("Shell", "#89e051"),
        ("Dart", "#00B4AB"),
        ("Swift", "#ffac45"),
        ("Kotlin", "#A97BFF"),
        ("Ruby", "#701516"),
        ("PHP", "#4F5D95"),
    ])
});

/// Look up the display color for a language.
#[must_use]
pub fn color_for(language: &str) -> &'static str {
    LANGUAGE_COLORS.get(language).copied().unwrap_or(DEFAULT_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_language_color() {
        assert_eq!(color_for("Rust"), "#dea584");
    }

    #[test]
    fn test_unknown_language_falls_back() {
        assert_eq!(color_for("Brainfuck"), DEFAULT_COLOR);
    }
}
