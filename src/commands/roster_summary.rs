//! Roster command: weekly points and team averages without any awards

use std::path::PathBuf;

use tracing::info;

use crate::{
    config::GameConfig,
    fpl::FplClient,
    models::TeamWeeks,
    report::render_roster,
    roster::build_roster,
    Result,
};

use super::resolve_config_path;

/// Handle the roster command
pub async fn handle_roster_summary(
    config: Option<PathBuf>,
    base_url: String,
    as_json: bool,
) -> Result<()> {
    let path = resolve_config_path(config)?;
    info!(path = %path.display(), "loading configuration");
    let config = GameConfig::load(&path)?;

    let client = FplClient::with_base_url(base_url)?;
    let roster = build_roster(&config.team_names(), &config, &client).await?;

    let teams: Vec<TeamWeeks> = roster.teams().iter().map(TeamWeeks::from).collect();
    if as_json {
        println!("{}", serde_json::to_string_pretty(&teams)?); // tarpaulin::skip
    } else {
        println!("{}", render_roster(&teams)); // tarpaulin::skip
    }

    Ok(())
}
