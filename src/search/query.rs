use std::fmt;

use super::error::SearchError;

/// Maximum query length accepted from the input field (characters)
pub const MAX_QUERY_CHARS: usize = 256;

/// A trimmed, lowercased, non-empty query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First character of the query, used as the shard directory
    pub fn first_char(&self) -> char {
        // Non-empty by construction
        self.0.chars().next().unwrap_or_default()
    }
}

impl fmt::Display for NormalizedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim surrounding whitespace and lowercase
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalize raw input, rejecting queries that are empty afterwards
pub fn validate_query(raw: &str) -> Result<NormalizedQuery, SearchError> {
    let normalized = normalize_query(raw);
    if normalized.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    Ok(NormalizedQuery(normalized))
}
