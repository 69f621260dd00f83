//! Command-line interface for ghstreak.

pub mod args;
pub mod commands;
