//! Game configuration: roster, player IDs and the bonus rule set.
//!
//! The configuration is a TOML file with two required sections and one
//! optional one:
//!
//! ```toml
//! [players]
//! "Sardaukar" = 1139641
//! "Vetti Dogs" = 4113
//!
//! [teams]
//! "Team ABS" = ["Sardaukar", "Vetti Dogs"]
//!
//! [rules]                      # optional, defaults to RuleBundle::default()
//! max_sum_player_count = 2
//! max_position_for_award = 3
//!
//! [rules.gameweek]
//! average_bonus = 5.0
//! sum_bonus = 2.0
//! position_awards = [3.0, 2.0, 1.0]
//!
//! [rules.halfway]
//! gameweek = 19
//! average_bonus = 10.0
//! sum_bonus = 5.0
//! position_awards = [6.0, 4.0, 2.0]
//!
//! [rules.end_of_season]
//! gameweek = 38
//! average_bonus = 20.0
//! sum_bonus = 10.0
//! position_awards = [12.0, 8.0, 4.0]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::{
    cli::types::{Gameweek, PlayerId},
    BonusError, Result,
};

#[cfg(test)]
mod tests;

pub const PLAYERS_SECTION: &str = "players";
pub const TEAMS_SECTION: &str = "teams";

/// Flat bonuses and the ranked award table for one scoring period.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AwardRules {
    /// Paid to every team whose average equals the maximum.
    pub average_bonus: f64,
    /// Paid to every team whose top players sum equals the maximum.
    pub sum_bonus: f64,
    /// Award amount by 0-based rank.
    #[serde(default)]
    pub position_awards: Vec<f64>,
}

/// Award rules evaluated once, at a checkpoint gameweek.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StageRules {
    pub gameweek: Gameweek,
    #[serde(flatten)]
    pub awards: AwardRules,
}

/// Immutable bonus rule set shared by every allocation pass.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RuleBundle {
    /// Number of best players counted for the top players sum.
    pub max_sum_player_count: usize,
    /// Ranks at or beyond this 0-based position receive no individual award.
    pub max_position_for_award: usize,
    pub gameweek: AwardRules,
    pub halfway: StageRules,
    pub end_of_season: StageRules,
}

impl Default for RuleBundle {
    fn default() -> Self {
        Self {
            max_sum_player_count: 2,
            max_position_for_award: 3,
            gameweek: AwardRules {
                average_bonus: 5.0,
                sum_bonus: 2.0,
                position_awards: vec![3.0, 2.0, 1.0],
            },
            halfway: StageRules {
                gameweek: Gameweek::new(19),
                awards: AwardRules {
                    average_bonus: 10.0,
                    sum_bonus: 5.0,
                    position_awards: vec![6.0, 4.0, 2.0],
                },
            },
            end_of_season: StageRules {
                gameweek: Gameweek::new(38),
                awards: AwardRules {
                    average_bonus: 20.0,
                    sum_bonus: 10.0,
                    position_awards: vec![12.0, 8.0, 4.0],
                },
            },
        }
    }
}

impl RuleBundle {
    /// Reject rule sets the allocation passes cannot apply.
    pub fn validate(&self) -> Result<()> {
        if self.max_sum_player_count == 0 {
            return Err(invalid_rules("max_sum_player_count must be at least 1"));
        }
        for (label, stage) in [("halfway", &self.halfway), ("end_of_season", &self.end_of_season)] {
            if stage.gameweek.as_u16() == 0 {
                return Err(invalid_rules(format!("{label} gameweek must be at least 1")));
            }
        }
        if self.halfway.gameweek > self.end_of_season.gameweek {
            return Err(invalid_rules(format!(
                "halfway gameweek {} is after end of season gameweek {}",
                self.halfway.gameweek, self.end_of_season.gameweek
            )));
        }

        // Team totals only ever increase.
        let tables = [
            ("gameweek", &self.gameweek),
            ("halfway", &self.halfway.awards),
            ("end_of_season", &self.end_of_season.awards),
        ];
        for (label, awards) in tables {
            let amounts = [awards.average_bonus, awards.sum_bonus]
                .into_iter()
                .chain(awards.position_awards.iter().copied());
            for amount in amounts {
                if !amount.is_finite() || amount < 0.0 {
                    return Err(invalid_rules(format!(
                        "{label} award amount {amount} must be a non-negative number"
                    )));
                }
            }
        }
        Ok(())
    }
}

fn invalid_rules(message: impl Into<String>) -> BonusError {
    BonusError::InvalidRules {
        message: message.into(),
    }
}

/// On-disk layout; sections are optional here so their absence can be
/// reported by name.
#[derive(Debug, Deserialize)]
struct RawConfig {
    players: Option<BTreeMap<String, PlayerId>>,
    teams: Option<BTreeMap<String, Vec<String>>>,
    rules: Option<RuleBundle>,
}

/// Parsed and validated game configuration.
#[derive(Debug, Clone)]
pub struct GameConfig {
    players: BTreeMap<String, PlayerId>,
    teams: BTreeMap<String, Vec<String>>,
    rules: RuleBundle,
}

impl GameConfig {
    /// Every team must list only declared players and have at least
    /// `max_sum_player_count` of them.
    pub fn new(
        players: BTreeMap<String, PlayerId>,
        teams: BTreeMap<String, Vec<String>>,
        rules: RuleBundle,
    ) -> Result<Self> {
        rules.validate()?;
        for (team, members) in &teams {
            if members.len() < rules.max_sum_player_count {
                return Err(BonusError::InsufficientPlayers {
                    team: team.clone(),
                    required: rules.max_sum_player_count,
                    found: members.len(),
                });
            }
            if let Some(unknown) = members.iter().find(|m| !players.contains_key(*m)) {
                return Err(BonusError::PlayerNotFound {
                    name: unknown.clone(),
                });
            }
        }
        Ok(Self {
            players,
            teams,
            rules,
        })
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(s)?;
        let players = raw.players.ok_or_else(|| missing_section(PLAYERS_SECTION))?;
        let teams = raw.teams.ok_or_else(|| missing_section(TEAMS_SECTION))?;
        Self::new(players, teams, raw.rules.unwrap_or_default())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn rules(&self) -> &RuleBundle {
        &self.rules
    }

    /// Team names in the stable order used for building and reporting.
    pub fn team_names(&self) -> Vec<String> {
        self.teams.keys().cloned().collect()
    }

    pub fn team(&self, name: &str) -> Result<&[String]> {
        self.teams
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| BonusError::TeamNotFound {
                name: name.to_string(),
            })
    }

    pub fn player_id(&self, name: &str) -> Result<PlayerId> {
        self.players
            .get(name)
            .copied()
            .ok_or_else(|| BonusError::PlayerNotFound {
                name: name.to_string(),
            })
    }
}

fn missing_section(section: &str) -> BonusError {
    BonusError::MissingSection {
        section: section.to_string(),
    }
}

/// Path: <config dir>/fpl-bonus/game.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("fpl-bonus").join("game.toml"))
}
