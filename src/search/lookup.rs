//! Lookup key derivation for the static results tree.
//!
//! Results live at `<base>/<first char>/<query>.json`. The path is derived
//! from the normalized query only; nothing else about the request varies.

use anyhow::{Result, anyhow};
use url::Url;

use super::query::NormalizedQuery;

/// Relative lookup path for a query, unencoded: `{first_char}/{query}.json`
pub fn lookup_path(query: &NormalizedQuery) -> String {
    format!("{}/{}.json", query.first_char(), query.as_str())
}

/// Full request URL under `base`.
///
/// Each component becomes one path segment, so characters such as `/`, `?`,
/// `#` and spaces in the query are percent-encoded instead of changing the
/// shape of the URL.
pub fn lookup_url(base: &Url, query: &NormalizedQuery) -> Result<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| anyhow!("Base URL cannot carry a path: {}", base))?;
        // Base "https://host/results/" ends in an empty segment
        segments.pop_if_empty();
        segments.push(&query.first_char().to_string());
        segments.push(&format!("{}.json", query.as_str()));
    }
    Ok(url)
}
