//! Web Search Client - look up search results from a static results tree
//!
//! Results are pre-built JSON files served from a fixed base URL, one file
//! per query at `<base>/<first letter>/<query>.json`. This library provides:
//!
//! - Query normalization and validation (trim + lowercase, non-empty)
//! - Lookup URL derivation for a normalized query
//! - A reachability check performed before every search
//! - A single-request search flow mapping every failure to a user-facing message
//! - An interactive terminal screen and a one-shot CLI on top of that flow
//!
//! # Example
//!
//! ```no_run
//! use web_search_client::config::SearchConfig;
//! use web_search_client::models::SearchOutcome;
//!
//! let service = SearchConfig::default().build_service()?;
//! match service.search("  Rust ") {
//!     SearchOutcome::Results(records) => println!("{} results", records.len()),
//!     SearchOutcome::Failed(err) => println!("{}", err),
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod models;
pub mod network;
pub mod search;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use clipboard::copy_url_to_clipboard;
pub use config::SearchConfig;
pub use models::{ResultRecord, SearchOutcome};
pub use network::{ConnectivityProbe, TcpConnectivityProbe};
pub use search::{
    HttpResultsFetcher, ResultsFetcher, SearchError, SearchService, lookup_path, lookup_url,
    normalize_query, validate_query,
};
