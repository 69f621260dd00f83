//! ghstreak - GitHub contribution streak and profile stats CLI
//!
//! This crate computes contribution streaks and profile statistics from a
//! locally exported GitHub snapshot (profile, repositories, contribution
//! calendar) and renders them in the terminal.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod github;
pub mod output;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::GhStreakError;
pub use github::{JsonSnapshotSource, Snapshot, SnapshotSource};
