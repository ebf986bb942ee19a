//! Output models used for printing and JSON serialization.

use serde::Serialize;

use crate::roster::{Roster, Team};

/// Final bonus total for one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStanding {
    pub name: String,
    pub points: f64,
}

impl From<&Team> for TeamStanding {
    fn from(team: &Team) -> Self {
        Self {
            name: team.name.clone(),
            points: team.points(),
        }
    }
}

impl TeamStanding {
    /// Standings in roster order.
    pub fn from_roster(roster: &Roster) -> Vec<Self> {
        roster.teams().iter().map(Self::from).collect()
    }
}

/// A player's weekly points.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerWeeks {
    pub id: u64,
    pub name: String,
    /// Points per gameweek, GW1 first.
    pub points: Vec<i64>,
}

/// A team's weekly averages and its players.
#[derive(Debug, Clone, Serialize)]
pub struct TeamWeeks {
    pub name: String,
    pub averages: Vec<f64>,
    pub total_average: f64,
    pub players: Vec<PlayerWeeks>,
}

impl From<&Team> for TeamWeeks {
    fn from(team: &Team) -> Self {
        Self {
            name: team.name.clone(),
            averages: team.averages_by_gameweek().to_vec(),
            total_average: team.total_average(),
            players: team
                .players()
                .map(|p| PlayerWeeks {
                    id: p.id.as_u64(),
                    name: p.name.clone(),
                    points: p.points_for_all_gameweeks().to_vec(),
                })
                .collect(),
        }
    }
}
