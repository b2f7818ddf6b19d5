//! Result type definitions

use serde::{Deserialize, Deserializer, Serialize};

/// A single search result as returned by the provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Relevance score in `[0, 1]`
    #[serde(rename = "score", default)]
    pub relevance_score: f64,
    /// Page title (providers occasionally send `null`)
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Opaque resource identifier, usually the URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    pub url: String,
    /// Publication date as reported by the provider
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl SearchResult {
    /// Create a new result
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            relevance_score: 0.0,
            title: title.into(),
            id: url.clone(),
            url,
            published_date: None,
            author: None,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.relevance_score = score;
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_published_date(mut self, date: impl Into<String>) -> Self {
        self.published_date = Some(date.into());
        self
    }
}

/// Ordered results of one search, in provider order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    /// Provider-side request id, useful when reporting issues upstream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl SearchResponse {
    pub fn with_results(results: Vec<SearchResult>) -> Self {
        Self {
            results,
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

fn null_as_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
