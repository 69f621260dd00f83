//! Language statistics over the user's repositories.

pub mod colors;
pub mod metrics;

pub use colors::{color_for, DEFAULT_COLOR, LANGUAGE_COLORS};
pub use metrics::{top_languages, total_stars, LanguageMetrics};
