//! Feature modules for ghstreak.
//!
//! - `streaks`: streak analysis and terminal charts
//! - `languages`: language usage and star totals
//! - `summary`: full profile summary assembly

pub mod languages;
pub mod streaks;
pub mod summary;
