use reqwest::{
    header::{HeaderValue, ACCEPT},
    Client,
};
use std::collections::BTreeMap;
use tracing::debug;

use crate::{cli::types::PlayerId, fpl::types::EntryHistory, BonusError, Result};


/// Base URL of the Fantasy Premier League site.
pub const FPL_BASE_URL: &str = "https://fantasy.premierleague.com";

/// Source of per-gameweek cumulative points for a player.
///
/// Implementations return one value per gameweek in ascending order. Errors
/// are propagated to the caller; no retries are attempted.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    async fn fetch_history(&self, player_id: PlayerId) -> Result<Vec<i64>>;
}

/// reqwest-backed [`DataSource`] reading the public entry history endpoint.
#[derive(Debug, Clone)]
pub struct FplClient {
    client: Client,
    base_url: String,
}

impl FplClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(FPL_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent("fpl-bonus/0.1").build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn history_url(&self, player_id: PlayerId) -> String {
        format!("{}/api/entry/{}/history/", self.base_url, player_id)
    }

    pub async fn get_entry_history(&self, player_id: PlayerId) -> Result<EntryHistory> {
        let url = self.history_url(player_id);
        debug!(%url, "fetching entry history");

        let res = self
            .client
            .get(&url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(BonusError::FetchStatus {
                player_id,
                status: status.as_u16(),
            });
        }

        Ok(res.json::<EntryHistory>().await?)
    }
}

impl DataSource for FplClient {
    async fn fetch_history(&self, player_id: PlayerId) -> Result<Vec<i64>> {
        Ok(self.get_entry_history(player_id).await?.cumulative_points())
    }
}

/// Histories held in memory, keyed by player.
impl DataSource for BTreeMap<PlayerId, Vec<i64>> {
    async fn fetch_history(&self, player_id: PlayerId) -> Result<Vec<i64>> {
        self.get(&player_id)
            .cloned()
            .ok_or(BonusError::FetchStatus {
                player_id,
                status: 404,
            })
    }
}
