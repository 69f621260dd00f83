//! Contribution streak analysis and visualization.
//!
//! The analyzer is a pure two-pass scan over an ordered day sequence; the
//! visualization helpers render the same sequence for the terminal.

pub mod analyzer;
pub mod visualization;

pub use analyzer::{analyze, StreakStats};
pub use visualization::{render_bar_chart, render_heatmap, render_sparkline};
