//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::fpl::FPL_BASE_URL;

/// Arguments shared by every command
#[derive(Debug, Default, Args)]
pub struct CommonArgs {
    /// Game config file (or set `FPL_BONUS_CONFIG` env var).
    #[clap(long, short)]
    pub config: Option<PathBuf>,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,

    /// Log fetches and every award to stderr.
    #[clap(long, short)]
    pub verbose: bool,

    /// Base URL of the FPL site.
    #[clap(long, default_value = FPL_BASE_URL, hide = true)]
    pub base_url: String,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch every player's history, allocate bonuses and print team totals.
    ///
    /// This is the default when no command is given.
    Standings {
        #[clap(flatten)]
        args: CommonArgs,
    },

    /// Print each team's weekly averages and each player's weekly points.
    Roster {
        #[clap(flatten)]
        args: CommonArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "fpl-bonus", about = "Fantasy Premier League team bonus calculator")]
pub struct FplBonus {
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

impl FplBonus {
    /// The selected command, falling back to a default standings run.
    pub fn command(self) -> Commands {
        self.command.unwrap_or_else(|| Commands::Standings {
            args: CommonArgs {
                base_url: FPL_BASE_URL.to_string(),
                ..CommonArgs::default()
            },
        })
    }
}
