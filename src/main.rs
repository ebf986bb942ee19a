//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use fpl_bonus::{
    cli::{Commands, FplBonus},
    commands::{
        roster_summary::handle_roster_summary,
        standings::{handle_standings, StandingsParams},
    },
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "fpl_bonus=debug" } else { "fpl_bonus=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = FplBonus::parse();

    match app.command() {
        Commands::Standings { args } => {
            init_logging(args.verbose);
            handle_standings(StandingsParams {
                config: args.config,
                base_url: args.base_url,
                as_json: args.json,
            })
            .await
            .context("standings run aborted")?
        }

        Commands::Roster { args } => {
            init_logging(args.verbose);
            handle_roster_summary(args.config, args.base_url, args.json)
                .await
                .context("roster run aborted")?
        }
    }

    Ok(())
}
