//! Fantasy Premier League Team Bonus Library
//!
//! Scores a season-long team game played on top of Fantasy Premier League:
//! players are grouped into teams, their weekly points are fetched from the
//! FPL site, and teams collect bonus points under a configurable rule set.
//!
//! ## Features
//!
//! - **History Retrieval**: Fetch each entry's cumulative points per gameweek
//! - **Team Averages**: Weekly and overall averages per team
//! - **Weekly Bonuses**: Best team average, best top players sum, ranked positions
//! - **Stage Bonuses**: Halfway and end of season awards on cumulative points
//! - **Tie Splitting**: Players tied on points share the awards for their ranks
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_bonus::{commands::standings::compute_standings, config::GameConfig, fpl::FplClient};
//!
//! # async fn example() -> fpl_bonus::Result<()> {
//! let config = GameConfig::load("game.toml".as_ref())?;
//! let client = FplClient::new()?;
//!
//! let outcome = compute_standings(&config, &client).await?;
//! for standing in outcome.standings() {
//!     println!("{} - {}", standing.name, standing.points);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point at your game config to avoid passing it in every command:
//! ```bash
//! export FPL_BONUS_CONFIG=~/leagues/game.toml
//! ```

pub mod allocation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fpl;
pub mod models;
pub mod report;
pub mod roster;

// Re-export commonly used types
pub use cli::types::{Gameweek, PlayerId};
pub use config::{GameConfig, RuleBundle};
pub use error::{BonusError, Result};

pub const CONFIG_PATH_ENV_VAR: &str = "FPL_BONUS_CONFIG";
