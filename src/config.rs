//! Runtime configuration: where results live and how reachability is probed.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use url::Url;

use crate::network::TcpConnectivityProbe;
use crate::search::{HttpResultsFetcher, SearchService};

/// Root of the static results tree
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/fedmich/Search-Web/main/results/web/";

/// Connect timeout for the reachability probe (milliseconds)
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub base_url: Url,
    pub probe_timeout: Duration,
}

impl SearchConfig {
    pub fn new(base_url: &str, probe_timeout_ms: u64) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            probe_timeout: Duration::from_millis(probe_timeout_ms),
        })
    }

    /// Wire the production probe and fetcher to this configuration
    pub fn build_service(&self) -> Result<SearchService> {
        let probe = TcpConnectivityProbe::for_url(&self.base_url, self.probe_timeout)?;
        let fetcher = HttpResultsFetcher::new()?;
        Ok(SearchService::new(self.base_url.clone(), Box::new(probe), Box::new(fetcher)))
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            probe_timeout: Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS),
        }
    }
}

/// Parse and check a base URL: absolute, http(s), with a host
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("Invalid base URL: {}", raw))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!("Base URL must use http or https, got {}", url.scheme());
    }
    if url.host_str().is_none() {
        bail!("Base URL has no host: {}", raw);
    }

    Ok(url)
}
