//! Data models for the search client.
//!
//! - [`ResultRecord`] - One search hit as served by the static results tree
//! - [`SearchOutcome`] - What a single search action produced
//!
//! Result records use serde with the short wire names of the results files
//! (`t`, `d`, `u`).

pub mod search;

pub use search::{ResultRecord, SearchOutcome};
