use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "ghstreak")]
#[command(about = "GitHub contribution streaks and profile stats in your terminal")]
#[command(long_about = "ghstreak - GitHub contribution streak and profile stats CLI

Computes contribution streaks, language usage, and profile statistics from a
locally exported GitHub snapshot. ghstreak never talks to the network; export
a snapshot with the gh CLI (or any tool that can reach the GitHub APIs) and
point ghstreak at the file.

QUICK START:
  ghstreak streaks calendar.json     Streak stats from a calendar export
  ghstreak summary snapshot.json     Full profile summary
  gh api graphql ... | ghstreak streaks -   Pipe straight from gh

SNAPSHOT FORMAT:
  A JSON object with optional 'profile', 'repos', and 'calendar' sections,
  or a bare contribution calendar (GraphQL weeks object or flat day list).

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  ghstreak <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output, or 'json' for
    /// machine-readable output suitable for scripting. Defaults to the
    /// configured format, initially 'pretty'.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show contribution streak statistics
    ///
    /// Computes the current streak, the longest streak, and the total
    /// contribution count over the calendar window in the snapshot.
    ///
    /// A zero-count final day does not break the current streak: the day is
    /// usually still in progress when the calendar is exported.
    ///
    /// # Examples
    ///
    ///   ghstreak streaks snapshot.json
    ///   ghstreak streaks calendar.json -o json
    ///   cat calendar.json | ghstreak streaks -
    #[command(alias = "s")]
    Streaks {
        /// Snapshot or calendar JSON file ('-' or omitted = stdin,
        /// unless a default snapshot is configured)
        snapshot: Option<PathBuf>,
    },

    /// Show the full profile summary
    ///
    /// Combines profile counts, total stars, top languages, and streak
    /// statistics into one view. Requires a snapshot with a profile section.
    ///
    /// # Examples
    ///
    ///   ghstreak summary snapshot.json
    ///   ghstreak summary -o json | jq .streaks
    Summary {
        /// Snapshot JSON file ('-' or omitted = stdin,
        /// unless a default snapshot is configured)
        snapshot: Option<PathBuf>,
    },

    /// Show top languages across repositories
    ///
    /// Counts primary languages over the snapshot's repository list and
    /// shows the most used ones with their share.
    ///
    /// # Examples
    ///
    ///   ghstreak languages snapshot.json
    ///   ghstreak languages snapshot.json --limit 10
    #[command(alias = "langs")]
    Languages {
        /// Snapshot JSON file ('-' or omitted = stdin,
        /// unless a default snapshot is configured)
        snapshot: Option<PathBuf>,

        /// Number of languages to show (default from config, initially 5)
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Show a contribution heatmap
    ///
    /// Visual calendar of contribution activity, anchored at the last day
    /// of the exported window.
    ///
    /// # Examples
    ///
    ///   ghstreak heatmap calendar.json
    ///   ghstreak heatmap calendar.json --weeks 12
    Heatmap {
        /// Snapshot or calendar JSON file ('-' or omitted = stdin,
        /// unless a default snapshot is configured)
        snapshot: Option<PathBuf>,

        /// Number of weeks to show (default from config, initially 8)
        #[arg(long, short = 'w')]
        weeks: Option<usize>,
    },

    /// Show contribution trends over recent days
    ///
    /// Sparkline and bar chart of daily contribution counts at the end of
    /// the window, with total/average/peak figures.
    ///
    /// # Examples
    ///
    ///   ghstreak trends calendar.json
    ///   ghstreak trends calendar.json --days 90
    Trends {
        /// Snapshot or calendar JSON file ('-' or omitted = stdin,
        /// unless a default snapshot is configured)
        snapshot: Option<PathBuf>,

        /// Number of days to show (default from config, initially 30)
        #[arg(long, short = 'd')]
        days: Option<usize>,
    },

    /// Generate shell completions
    ///
    /// Outputs a completion script for the specified shell.
    /// Redirect to a file or source directly.
    ///
    /// # Examples
    ///
    ///   ghstreak completions bash > ~/.bash_completion.d/ghstreak
    ///   ghstreak completions zsh > ~/.zfunc/_ghstreak
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
