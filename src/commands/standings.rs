//! Standings command: fetch every history, allocate bonuses, report totals

use std::path::PathBuf;

use tracing::info;

use crate::{
    allocation::{AllocationEngine, Award},
    config::GameConfig,
    fpl::{DataSource, FplClient},
    models::TeamStanding,
    report::{render_standings, render_standings_json},
    roster::{build_roster, Roster},
    Result,
};

use super::resolve_config_path;

/// Options for a standings run.
#[derive(Debug)]
pub struct StandingsParams {
    pub config: Option<PathBuf>,
    pub base_url: String,
    pub as_json: bool,
}

/// Bonus allocation result for a whole game.
#[derive(Debug)]
pub struct GameOutcome {
    pub roster: Roster,
    pub awards: Vec<Award>,
}

impl GameOutcome {
    pub fn standings(&self) -> Vec<TeamStanding> {
        TeamStanding::from_roster(&self.roster)
    }
}

/// Build the roster from `source` and run every allocation pass over it.
pub async fn compute_standings<S: DataSource>(
    config: &GameConfig,
    source: &S,
) -> Result<GameOutcome> {
    let mut roster = build_roster(&config.team_names(), config, source).await?;

    let mut engine = AllocationEngine::new(config.rules());
    engine.run(&mut roster)?;

    Ok(GameOutcome {
        roster,
        awards: engine.into_awards(),
    })
}

/// Handle the standings command
pub async fn handle_standings(params: StandingsParams) -> Result<()> {
    let path = resolve_config_path(params.config)?;
    info!(path = %path.display(), "loading configuration");
    let config = GameConfig::load(&path)?;

    // tarpaulin::skip - HTTP call, tested via wiremock in fpl::http
    let client = FplClient::with_base_url(params.base_url)?;
    let outcome = compute_standings(&config, &client).await?;

    let standings = outcome.standings();
    if params.as_json {
        println!("{}", render_standings_json(&standings)?); // tarpaulin::skip
    } else {
        println!("{}", render_standings(&standings)); // tarpaulin::skip
    }

    Ok(())
}
