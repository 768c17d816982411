//! The search action: the one handler behind the search button.
//!
//! Steps run strictly in order and stop at the first failure:
//! connectivity check, query validation, URL derivation, fetch, shape check.
//! Only the fetch touches the results server.

use url::Url;

use super::client::{ResultsFetcher, extract_results};
use super::error::SearchError;
use super::lookup::lookup_url;
use super::query::validate_query;
use crate::models::SearchOutcome;
use crate::network::ConnectivityProbe;

pub struct SearchService {
    base_url: Url,
    connectivity: Box<dyn ConnectivityProbe>,
    fetcher: Box<dyn ResultsFetcher>,
}

impl SearchService {
    pub fn new(
        base_url: Url,
        connectivity: Box<dyn ConnectivityProbe>,
        fetcher: Box<dyn ResultsFetcher>,
    ) -> Self {
        Self { base_url, connectivity, fetcher }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Run one search for the raw input text
    pub fn search(&self, raw_query: &str) -> SearchOutcome {
        match self.try_search(raw_query) {
            Ok(outcome) => outcome,
            Err(err) => SearchOutcome::Failed(err),
        }
    }

    fn try_search(&self, raw_query: &str) -> Result<SearchOutcome, SearchError> {
        if !self.connectivity.is_connected() {
            log::warn!("[SEARCH] offline, skipping request");
            return Err(SearchError::Offline);
        }

        let query = validate_query(raw_query)?;

        let url = lookup_url(&self.base_url, &query).map_err(|e| {
            log::warn!("[SEARCH] cannot build lookup URL for {:?}: {:#}", query.as_str(), e);
            SearchError::FetchFailed
        })?;

        let document = self.fetcher.fetch(&url).map_err(|e| {
            log::warn!("[SEARCH] fetch failed for {}: {:#}", url, e);
            SearchError::FetchFailed
        })?;

        let records = extract_results(&document).map_err(|e| {
            log::warn!("[SEARCH] bad results document from {}: {:#}", url, e);
            SearchError::FetchFailed
        })?;

        if records.is_empty() {
            log::info!("[SEARCH] no results for {:?}", query.as_str());
            return Err(SearchError::NoResults);
        }

        log::info!("[SEARCH] {} results for {:?}", records.len(), query.as_str());
        Ok(SearchOutcome::Results(records))
    }
}
