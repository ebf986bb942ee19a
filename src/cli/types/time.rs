//! Gameweek numbering.

use crate::error::{BonusError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 1-based gameweek number, as shown on the FPL site.
///
/// Per-gameweek data is stored 0-based; [`Gameweek::index`] converts after
/// the caller has checked the gameweek against the recorded length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Gameweek(pub u16);

impl Gameweek {
    pub fn new(gameweek: u16) -> Self {
        Self(gameweek)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Gameweek number as a count of weeks played through this one.
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }

    /// Checked 0-based index into a sequence of `recorded` per-gameweek values.
    pub fn index(&self, recorded: usize) -> Result<usize> {
        let gw = self.as_usize();
        if gw == 0 || gw > recorded {
            return Err(BonusError::OutOfRange {
                gameweek: *self,
                recorded,
            });
        }
        Ok(gw - 1)
    }
}

impl Default for Gameweek {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Gameweek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Gameweek {
    type Err = BonusError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_in_bounds() {
        assert_eq!(Gameweek::new(1).index(3).unwrap(), 0);
        assert_eq!(Gameweek::new(3).index(3).unwrap(), 2);
    }

    #[test]
    fn test_index_zero_is_out_of_range() {
        let err = Gameweek::new(0).index(3).unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_index_past_recorded_is_out_of_range() {
        match Gameweek::new(4).index(3) {
            Err(BonusError::OutOfRange { gameweek, recorded }) => {
                assert_eq!(gameweek, Gameweek::new(4));
                assert_eq!(recorded, 3);
            }
            other => panic!("Expected OutOfRange, got {:?}", other),
        }
    }
}
