//! Roster model: players grouped into teams with derived weekly points
//!
//! - `models`: `Player`, `Team` and `Roster`
//! - `build`: assembling a roster from configuration and a data source

pub mod build;
pub mod models;


pub use build::build_roster;
pub use models::{gameweek_deltas, Player, Roster, Team, TeamIndex};
