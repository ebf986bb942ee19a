use serde::{Deserialize, Serialize};

use crate::cli::types::Gameweek;


/// One row of an entry's season history.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameweekHistory {
    pub event: Gameweek,
    /// Points scored in this gameweek.
    pub points: i64,
    /// Overall points through this gameweek.
    pub total_points: i64,
}

/// Root of `/api/entry/{id}/history/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EntryHistory {
    #[serde(default)]
    pub current: Vec<GameweekHistory>,
}

impl EntryHistory {
    /// Cumulative totals indexed from GW1 through the last recorded event.
    ///
    /// Entries that joined after GW1 have no rows for the earlier events;
    /// those count as 0. A gap inside the history repeats the previous total.
    pub fn cumulative_points(&self) -> Vec<i64> {
        let mut rows: Vec<&GameweekHistory> = self.current.iter().collect();
        rows.sort_by_key(|row| row.event);

        let last = rows.last().map_or(0, |row| row.event.as_usize());
        let mut totals = Vec::with_capacity(last);
        let mut overall = 0;
        let mut rows = rows.into_iter().peekable();
        for gw in 1..=last {
            while let Some(row) = rows.next_if(|row| row.event.as_usize() <= gw) {
                overall = row.total_points;
            }
            totals.push(overall);
        }
        totals
    }
}
