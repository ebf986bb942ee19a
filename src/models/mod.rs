//! Serializable views of roster and standings data.

pub mod output;

pub use output::{PlayerWeeks, TeamStanding, TeamWeeks};
