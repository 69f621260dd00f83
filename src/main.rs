use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use ghstreak::cli::args::{Cli, Commands};
use ghstreak::cli::commands;
use ghstreak::config::{ColorSetting, Config};
use ghstreak::error::GhStreakError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), GhStreakError> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }

    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Streaks { snapshot } => commands::streaks(snapshot, &config, format)?,
        Commands::Summary { snapshot } => commands::summary(snapshot, &config, format)?,
        Commands::Languages { snapshot, limit } => {
            commands::languages(snapshot, limit, &config, format)?
        }
        Commands::Heatmap { snapshot, weeks } => {
            commands::heatmap(snapshot, weeks, &config, format)?
        }
        Commands::Trends { snapshot, days } => commands::trends(snapshot, days, &config, format)?,
        Commands::Completions { shell } => commands::completions(&shell)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
