//! Error types for the FPL bonus calculator

use thiserror::Error;

use crate::cli::types::{Gameweek, PlayerId};


pub type Result<T> = std::result::Result<T, BonusError>;

#[derive(Error, Debug)]
pub enum BonusError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to parse identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Config path not provided, {env_var} not set and no default config directory")]
    MissingConfigPath { env_var: String },

    #[error("Required section [{section}] does not exist")]
    MissingSection { section: String },

    #[error("Team [{name}] does not exist")]
    TeamNotFound { name: String },

    #[error("Player [{name}] does not exist")]
    PlayerNotFound { name: String },

    #[error("Invalid rules: {message}")]
    InvalidRules { message: String },

    #[error("{team} has {found} players, at least {required} needed for the top players sum")]
    InsufficientPlayers {
        team: String,
        required: usize,
        found: usize,
    },

    #[error("Player [{player}] is listed more than once in {team}")]
    DuplicatePlayer { team: String, player: String },

    #[error("{team}: player {player} has {found} gameweeks recorded, expected {expected}")]
    MismatchedGameweeks {
        team: String,
        player: String,
        expected: usize,
        found: usize,
    },

    #[error("Could not fetch history for player {player_id}: HTTP {status}")]
    FetchStatus { player_id: PlayerId, status: u16 },

    #[error("Data for GW-{gameweek} does not exist ({recorded} gameweeks recorded)")]
    OutOfRange { gameweek: Gameweek, recorded: usize },

    #[error("{recorded} gameweeks recorded, more than a gameweek number can address")]
    TooManyGameweeks { recorded: usize },
}

impl BonusError {
    /// Missing, unreadable or invalid configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            BonusError::Io(_)
                | BonusError::ConfigParse(_)
                | BonusError::InvalidId(_)
                | BonusError::MissingConfigPath { .. }
                | BonusError::MissingSection { .. }
                | BonusError::TeamNotFound { .. }
                | BonusError::PlayerNotFound { .. }
                | BonusError::InvalidRules { .. }
                | BonusError::InsufficientPlayers { .. }
                | BonusError::DuplicatePlayer { .. }
                | BonusError::MismatchedGameweeks { .. }
        )
    }

    /// Failure retrieving or decoding a player's history.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            BonusError::Http(_) | BonusError::Json(_) | BonusError::FetchStatus { .. }
        )
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            BonusError::OutOfRange { .. } | BonusError::TooManyGameweeks { .. }
        )
    }
}
