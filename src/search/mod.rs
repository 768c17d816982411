//! Query handling and result lookup against the static results tree.

pub mod client;
pub mod error;
pub mod lookup;
pub mod query;
pub mod service;

pub use client::{HttpResultsFetcher, ResultsFetcher, extract_results};
pub use error::SearchError;
pub use lookup::{lookup_path, lookup_url};
pub use query::{NormalizedQuery, normalize_query, validate_query};
pub use service::SearchService;

#[cfg(test)]
pub(crate) mod test_support;
