use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::models::ResultRecord;

/// Field of the payload that carries the result list
const RESULTS_FIELD: &str = "results";

/// Source of results documents (allows mocking in tests)
pub trait ResultsFetcher {
    /// GET `url` and decode the body as JSON.
    ///
    /// Transport errors, non-success statuses and undecodable bodies are all errors.
    fn fetch(&self, url: &Url) -> Result<Value>;
}

/// Blocking HTTP fetcher using the default reqwest client settings
pub struct HttpResultsFetcher {
    client: Client,
}

impl HttpResultsFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("web-search-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::with_client(client))
    }

    /// Use a preconfigured client (proxy settings, TLS roots)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl ResultsFetcher for HttpResultsFetcher {
    fn fetch(&self, url: &Url) -> Result<Value> {
        log::debug!("[SEARCH] GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        log::debug!("[SEARCH] {} -> {}", url, status);

        let response = response
            .error_for_status()
            .with_context(|| format!("Server returned {} for {}", status, url))?;

        let body = response.text().context("Failed to read results document")?;
        Ok(parse_document(&body))
    }
}

/// Parse a response body; anything that is not JSON reads as `null`, which
/// `extract_results` treats as a missing result list
fn parse_document(body: &str) -> Value {
    match serde_json::from_str(body) {
        Ok(document) => document,
        Err(e) => {
            log::debug!("[SEARCH] body is not JSON ({} bytes): {}", body.len(), e);
            Value::Null
        }
    }
}

/// Pull the result list out of a results document.
///
/// A document that is not an object, has no `results` field, or whose
/// `results` is not an array yields an empty list. Records must carry all three
/// fields; a record missing one (or one that is not an object) fails the whole
/// document.
pub fn extract_results(document: &Value) -> Result<Vec<ResultRecord>> {
    let Some(results) = document.get(RESULTS_FIELD) else {
        return Ok(Vec::new());
    };
    if !results.is_array() {
        return Ok(Vec::new());
    }

    Vec::<ResultRecord>::deserialize(results).context("Malformed result record in document")
}
