//! Configuration management for ghstreak.
//!
//! This module handles loading and saving configuration from `~/.ghstreak/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, StatsConfig};
