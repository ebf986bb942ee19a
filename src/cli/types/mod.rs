//! Type-safe wrappers for FPL identifiers and gameweeks.

pub mod ids;
pub mod time;

pub use ids::PlayerId;
pub use time::Gameweek;
