//! Roster construction from configuration and fetched histories

use tracing::{debug, info};

use crate::{config::GameConfig, fpl::DataSource, Result};

use super::models::{Player, Roster, Team};

/// Build every named team, fetching each player's history from `source`.
///
/// Team sizes and membership were checked when `config` was built. Fetches
/// run one at a time and the first failure aborts the build.
pub async fn build_roster<S: DataSource>(
    team_names: &[String],
    config: &GameConfig,
    source: &S,
) -> Result<Roster> {
    let mut teams = Vec::with_capacity(team_names.len());

    for team_name in team_names {
        let member_names = config.team(team_name)?;
        info!(team = %team_name, players = member_names.len(), "loading team");
        let mut players = Vec::with_capacity(member_names.len());
        for player_name in member_names {
            let id = config.player_id(player_name)?;
            let cumulative = source.fetch_history(id).await?;
            debug!(player = %player_name, %id, gameweeks = cumulative.len(), "fetched history");
            players.push(Player::new(id, player_name.clone(), &cumulative));
        }

        teams.push(Team::new(team_name.clone(), players)?);
    }

    Roster::new(teams)
}
