//! Bonus allocation over a built roster
//!
//! Every pass reads the roster's weekly points and averages, which never
//! change, and adds bonus points to team totals. Passes therefore do not
//! depend on each other's awards and the order they run in only affects
//! the ledger order.
//!
//! - Weekly: average winner, top players sum, ranked positions
//! - Stage (halfway, end of season): ranked positions on cumulative points,
//!   average winner and top players sum to date

pub mod ranking;


use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use crate::{
    cli::types::Gameweek,
    config::{RuleBundle, StageRules},
    roster::{Player, Roster, Team, TeamIndex},
    BonusError, Result,
};

pub use ranking::{rank_entries, split_ranked_awards, RankedEntry};

/// Checkpoint gameweeks with their own award set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    Halfway,
    EndOfSeason,
}

impl Stage {
    pub const ALL: [Stage; 2] = [Stage::Halfway, Stage::EndOfSeason];

    pub fn rules(self, rules: &RuleBundle) -> &StageRules {
        match self {
            Stage::Halfway => &rules.halfway,
            Stage::EndOfSeason => &rules.end_of_season,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Halfway => write!(f, "halfway"),
            Stage::EndOfSeason => write!(f, "end of season"),
        }
    }
}

/// What an award was paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AwardKind {
    GameweekAverage,
    GameweekSum,
    GameweekPosition,
    StageAverage(Stage),
    StageSum(Stage),
    StagePosition(Stage),
}

/// One payment to a team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Award {
    pub team: TeamIndex,
    pub gameweek: Gameweek,
    pub kind: AwardKind,
    pub amount: f64,
}

/// Applies a [`RuleBundle`] to a roster and records every payment made.
#[derive(Debug)]
pub struct AllocationEngine<'a> {
    rules: &'a RuleBundle,
    awards: Vec<Award>,
}

impl<'a> AllocationEngine<'a> {
    pub fn new(rules: &'a RuleBundle) -> Self {
        Self {
            rules,
            awards: Vec::new(),
        }
    }

    /// Payments made so far, in the order they were applied.
    pub fn awards(&self) -> &[Award] {
        &self.awards
    }

    pub fn into_awards(self) -> Vec<Award> {
        self.awards
    }

    /// Run every weekly pass for each recorded gameweek, then each stage the
    /// season has reached.
    pub fn run(&mut self, roster: &mut Roster) -> Result<()> {
        let gameweeks = roster.gameweeks();
        info!(gameweeks, teams = roster.teams().len(), "allocating bonuses");

        let last = u16::try_from(gameweeks)
            .map_err(|_| BonusError::TooManyGameweeks { recorded: gameweeks })?;
        for gw in 1..=last {
            let gameweek = Gameweek::new(gw);
            self.award_gameweek_average(roster, gameweek)?;
            self.award_gameweek_sum(roster, gameweek)?;
            self.award_gameweek_positions(roster, gameweek)?;
        }

        for stage in Stage::ALL {
            let stage_gw = stage.rules(self.rules).gameweek;
            if stage_gw.as_usize() <= gameweeks {
                self.award_stage(roster, stage)?;
            } else {
                debug!(%stage, gameweek = %stage_gw, "stage not reached");
            }
        }

        info!(awards = self.awards.len(), "allocation complete");
        Ok(())
    }

    /// Flat bonus to every team sharing the best average for the gameweek.
    pub fn award_gameweek_average(&mut self, roster: &mut Roster, gameweek: Gameweek) -> Result<()> {
        let averages = collect_teams(roster, |team| team.average_for_gameweek(gameweek))?;
        let amount = self.rules.gameweek.average_bonus;
        for team in leaders(&averages) {
            self.grant(roster, team, gameweek, AwardKind::GameweekAverage, amount);
        }
        Ok(())
    }

    /// Flat bonus to every team sharing the best top players sum for the gameweek.
    pub fn award_gameweek_sum(&mut self, roster: &mut Roster, gameweek: Gameweek) -> Result<()> {
        let count = self.rules.max_sum_player_count;
        let sums = collect_teams(roster, |team| {
            Ok(top_sum(team.players_sorted_by_points_for_gameweek(gameweek)?, count))
        })?;
        let amount = self.rules.gameweek.sum_bonus;
        for team in leaders(&sums) {
            self.grant(roster, team, gameweek, AwardKind::GameweekSum, amount);
        }
        Ok(())
    }

    /// Position awards on the gameweek's individual points.
    pub fn award_gameweek_positions(
        &mut self,
        roster: &mut Roster,
        gameweek: Gameweek,
    ) -> Result<()> {
        let shares = {
            let mut entries = ranked(roster, |p| p.points_for_gameweek(gameweek))?;
            rank_entries(&mut entries);
            split_ranked_awards(
                &entries,
                &self.rules.gameweek.position_awards,
                self.rules.max_position_for_award,
            )
        };
        for (team, amount) in shares {
            self.grant(roster, team, gameweek, AwardKind::GameweekPosition, amount);
        }
        Ok(())
    }

    /// Stage awards evaluated on points from GW1 through the stage gameweek.
    pub fn award_stage(&mut self, roster: &mut Roster, stage: Stage) -> Result<()> {
        let rules = stage.rules(self.rules);
        let gameweek = rules.gameweek;
        let count = self.rules.max_sum_player_count;
        info!(%stage, %gameweek, "applying stage awards");

        let shares = {
            let mut entries = ranked(roster, |p| p.cumulative_points(gameweek))?;
            rank_entries(&mut entries);
            split_ranked_awards(
                &entries,
                &rules.awards.position_awards,
                self.rules.max_position_for_award,
            )
        };
        for (team, amount) in shares {
            self.grant(roster, team, gameweek, AwardKind::StagePosition(stage), amount);
        }

        let averages = collect_teams(roster, |team| team.average_through(gameweek))?;
        for team in leaders(&averages) {
            let amount = rules.awards.average_bonus;
            self.grant(roster, team, gameweek, AwardKind::StageAverage(stage), amount);
        }

        let sums = collect_teams(roster, |team| {
            Ok(top_sum(team.players_sorted_by_points_through(gameweek)?, count))
        })?;
        for team in leaders(&sums) {
            let amount = rules.awards.sum_bonus;
            self.grant(roster, team, gameweek, AwardKind::StageSum(stage), amount);
        }

        Ok(())
    }

    fn grant(
        &mut self,
        roster: &mut Roster,
        team: TeamIndex,
        gameweek: Gameweek,
        kind: AwardKind,
        amount: f64,
    ) {
        let total = roster.team_mut(team).add_points(amount);
        debug!(
            team = %roster.team(team).name,
            %gameweek,
            ?kind,
            amount,
            total,
            "award"
        );
        self.awards.push(Award {
            team,
            gameweek,
            kind,
            amount,
        });
    }
}

fn collect_teams<T>(roster: &Roster, value: impl Fn(&Team) -> Result<T>) -> Result<Vec<T>> {
    roster.teams().iter().map(value).collect()
}

fn ranked<'r>(
    roster: &'r Roster,
    points: impl Fn(&Player) -> Result<i64>,
) -> Result<Vec<RankedEntry<'r>>> {
    roster
        .players()
        .map(|p| {
            Ok(RankedEntry {
                player: &p.name,
                team: p.team(),
                team_name: &roster.team(p.team()).name,
                points: points(p)?,
            })
        })
        .collect()
}

fn top_sum(sorted: Vec<(&Player, i64)>, count: usize) -> i64 {
    sorted.into_iter().take(count).map(|(_, points)| points).sum()
}

/// Indices of every value equal to the maximum.
fn leaders<T: PartialOrd + Copy>(values: &[T]) -> Vec<usize> {
    let Some(max) = values
        .iter()
        .copied()
        .reduce(|best, v| if v > best { v } else { best })
    else {
        return Vec::new();
    };
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| **v == max)
        .map(|(i, _)| i)
        .collect()
}
