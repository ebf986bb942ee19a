//! Players, teams and the roster they form

use serde::Serialize;
use std::collections::BTreeMap;

use crate::{
    cli::types::{Gameweek, PlayerId},
    BonusError, Result,
};

/// Position of a team in its [`Roster`].
pub type TeamIndex = usize;

/// Weekly points from a cumulative series; a decrease yields a negative week.
pub fn gameweek_deltas(cumulative: &[i64]) -> Vec<i64> {
    let mut previous = 0;
    cumulative
        .iter()
        .map(|&overall| {
            let delta = overall - previous;
            previous = overall;
            delta
        })
        .collect()
}

/// A roster member and their weekly points
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    team: TeamIndex,
    gw_points: Vec<i64>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, cumulative: &[i64]) -> Self {
        Self {
            id,
            name: name.into(),
            team: 0,
            gw_points: gameweek_deltas(cumulative),
        }
    }

    /// Owning team, assigned when the team joins a [`Roster`].
    pub fn team(&self) -> TeamIndex {
        self.team
    }

    pub fn gameweeks(&self) -> usize {
        self.gw_points.len()
    }

    pub fn points_for_all_gameweeks(&self) -> &[i64] {
        &self.gw_points
    }

    pub fn points_for_gameweek(&self, gameweek: Gameweek) -> Result<i64> {
        Ok(self.gw_points[gameweek.index(self.gameweeks())?])
    }

    /// Total points from GW1 through `gameweek` inclusive.
    pub fn cumulative_points(&self, gameweek: Gameweek) -> Result<i64> {
        let last = gameweek.index(self.gameweeks())?;
        Ok(self.gw_points[..=last].iter().sum())
    }
}

/// A team of players with its running bonus total
#[derive(Debug, Clone, Serialize)]
pub struct Team {
    pub name: String,
    players: BTreeMap<String, Player>,
    points: f64,
    averages_by_gw: Vec<f64>,
    total_average: f64,
}

impl Team {
    /// Build a team and derive its weekly averages.
    ///
    /// Every player must have the same number of recorded gameweeks.
    pub fn new(name: impl Into<String>, players: Vec<Player>) -> Result<Self> {
        let name = name.into();
        let Some(first) = players.first() else {
            return Err(BonusError::InsufficientPlayers {
                team: name,
                required: 1,
                found: 0,
            });
        };
        let gameweeks = first.gameweeks();

        let mut by_name = BTreeMap::new();
        for player in players {
            let found = player.gameweeks();
            if found != gameweeks {
                return Err(BonusError::MismatchedGameweeks {
                    team: name,
                    player: player.name,
                    expected: gameweeks,
                    found,
                });
            }
            if by_name.contains_key(&player.name) {
                return Err(BonusError::DuplicatePlayer {
                    team: name,
                    player: player.name,
                });
            }
            by_name.insert(player.name.clone(), player);
        }

        let count = by_name.len() as f64;
        let averages_by_gw: Vec<f64> = (0..gameweeks)
            .map(|i| {
                let sum: i64 = by_name.values().map(|p| p.gw_points[i]).sum();
                sum as f64 / count
            })
            .collect();
        let total_average = mean(&averages_by_gw);

        Ok(Self {
            name,
            players: by_name,
            points: 0.0,
            averages_by_gw,
            total_average,
        })
    }

    /// Number of gameweeks with data, shared by every player.
    pub fn gameweeks(&self) -> usize {
        self.averages_by_gw.len()
    }

    /// Players in name order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn is_member(&self, player_name: &str) -> bool {
        self.players.contains_key(player_name)
    }

    pub fn player(&self, player_name: &str) -> Result<&Player> {
        self.players
            .get(player_name)
            .ok_or_else(|| BonusError::PlayerNotFound {
                name: format!("{player_name} in {}", self.name),
            })
    }

    pub fn points(&self) -> f64 {
        self.points
    }

    pub fn add_points(&mut self, points: f64) -> f64 {
        self.points += points;
        self.points
    }

    pub fn averages_by_gameweek(&self) -> &[f64] {
        &self.averages_by_gw
    }

    pub fn average_for_gameweek(&self, gameweek: Gameweek) -> Result<f64> {
        Ok(self.averages_by_gw[gameweek.index(self.gameweeks())?])
    }

    /// Mean of the weekly averages over all recorded gameweeks.
    pub fn total_average(&self) -> f64 {
        self.total_average
    }

    /// Mean of the weekly averages from GW1 through `gameweek`.
    pub fn average_through(&self, gameweek: Gameweek) -> Result<f64> {
        let last = gameweek.index(self.gameweeks())?;
        Ok(mean(&self.averages_by_gw[..=last]))
    }

    /// Players and their points for one gameweek, highest first, ties by name.
    pub fn players_sorted_by_points_for_gameweek(
        &self,
        gameweek: Gameweek,
    ) -> Result<Vec<(&Player, i64)>> {
        let mut points = self
            .players()
            .map(|p| Ok((p, p.points_for_gameweek(gameweek)?)))
            .collect::<Result<Vec<_>>>()?;
        sort_descending(&mut points);
        Ok(points)
    }

    /// Players and their cumulative points through a gameweek, highest first.
    pub fn players_sorted_by_points_through(
        &self,
        gameweek: Gameweek,
    ) -> Result<Vec<(&Player, i64)>> {
        let mut points = self
            .players()
            .map(|p| Ok((p, p.cumulative_points(gameweek)?)))
            .collect::<Result<Vec<_>>>()?;
        sort_descending(&mut points);
        Ok(points)
    }
}

fn sort_descending(points: &mut [(&Player, i64)]) {
    // BTreeMap iteration already yields name order, so a stable sort keeps it.
    points.sort_by(|a, b| b.1.cmp(&a.1));
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// All teams in a game, in the order they were built
#[derive(Debug, Clone, Serialize)]
pub struct Roster {
    teams: Vec<Team>,
}

impl Roster {
    /// Every team must cover the same gameweeks so weekly passes line up.
    pub fn new(mut teams: Vec<Team>) -> Result<Self> {
        if let Some(first) = teams.first() {
            let expected = first.gameweeks();
            for team in &teams {
                if team.gameweeks() != expected {
                    let player = team
                        .players()
                        .next()
                        .map(|p| p.name.clone())
                        .unwrap_or_default();
                    return Err(BonusError::MismatchedGameweeks {
                        team: team.name.clone(),
                        player,
                        expected,
                        found: team.gameweeks(),
                    });
                }
            }
        }
        for (index, team) in teams.iter_mut().enumerate() {
            for player in team.players.values_mut() {
                player.team = index;
            }
        }
        Ok(Self { teams })
    }

    pub fn gameweeks(&self) -> usize {
        self.teams.first().map_or(0, Team::gameweeks)
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, index: TeamIndex) -> &Team {
        &self.teams[index]
    }

    pub fn team_mut(&mut self, index: TeamIndex) -> &mut Team {
        &mut self.teams[index]
    }

    pub fn team_by_name(&self, name: &str) -> Result<&Team> {
        self.teams
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| BonusError::TeamNotFound {
                name: name.to_string(),
            })
    }

    /// Every player across all teams, team by team.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.teams.iter().flat_map(Team::players)
    }

    pub fn into_teams(self) -> Vec<Team> {
        self.teams
    }
}
