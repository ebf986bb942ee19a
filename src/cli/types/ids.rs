//! ID types for Fantasy Premier League entries.

use crate::error::{BonusError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for FPL entry (manager) IDs.
///
/// Each player in a roster is identified on the FPL site by the numeric ID of
/// their entry, which is the value stored in the `[players]` config section.
///
/// # Examples
///
/// ```rust
/// use fpl_bonus::PlayerId;
///
/// let id = PlayerId::new(1139641);
/// assert_eq!(id.as_u64(), 1139641);
/// assert_eq!(id.to_string(), "1139641");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = BonusError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}
