//! Fantasy Premier League data source.
//!
//! - `http`: the [`DataSource`](http::DataSource) seam and its reqwest client
//! - `types`: serde models for the entry history payload

pub mod http;
pub mod types;

pub use http::{DataSource, FplClient, FPL_BASE_URL};
pub use types::{EntryHistory, GameweekHistory};
