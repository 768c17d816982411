use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::search::SearchError;

/// One search hit: title, description and URL, taken verbatim from the payload.
///
/// All three fields must be present. Their values are not checked: numbers and
/// booleans are shown as written, `null` as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    #[serde(rename = "t", deserialize_with = "deserialize_text")]
    pub title: String,
    #[serde(rename = "d", deserialize_with = "deserialize_text")]
    pub description: String,
    #[serde(rename = "u", deserialize_with = "deserialize_text")]
    pub url: String,
}

/// Accept any JSON value for a display field
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

impl ResultRecord {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self { title: title.into(), description: description.into(), url: url.into() }
    }
}

/// Result of one search action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Non-empty result list, in server order
    Results(Vec<ResultRecord>),
    /// Any of the user-visible error conditions
    Failed(SearchError),
}
