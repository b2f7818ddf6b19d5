//! Search request and related data models

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;

/// Retrieval mode used by the provider
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Embedding-based semantic search
    #[default]
    Neural,
    /// Classic keyword matching
    Keyword,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neural => "neural",
            Self::Keyword => "keyword",
        }
    }
}

impl FromStr for SearchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "neural" => Ok(Self::Neural),
            "keyword" => Ok(Self::Keyword),
            other => Err(format!(
                "unknown search type '{}' (expected neural or keyword)",
                other
            )),
        }
    }
}

/// Content category filter understood by the provider
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    #[serde(rename = "company")]
    Company,
    #[serde(rename = "news")]
    News,
    #[serde(rename = "pdf")]
    Pdf,
    #[serde(rename = "research paper", alias = "paper")]
    Paper,
    #[serde(rename = "tweet")]
    Tweet,
    #[serde(rename = "github", alias = "repository")]
    Repository,
    #[serde(rename = "movie")]
    Movie,
    #[serde(rename = "song")]
    Song,
    #[serde(
        rename = "personal site",
        alias = "personal-site",
        alias = "personal_site"
    )]
    PersonalSite,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Company,
        Category::News,
        Category::Pdf,
        Category::Paper,
        Category::Tweet,
        Category::Repository,
        Category::Movie,
        Category::Song,
        Category::PersonalSite,
    ];

    /// Name sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::News => "news",
            Self::Pdf => "pdf",
            Self::Paper => "research paper",
            Self::Tweet => "tweet",
            Self::Repository => "github",
            Self::Movie => "movie",
            Self::Song => "song",
            Self::PersonalSite => "personal site",
        }
    }

    /// Name accepted on the command line
    pub fn cli_name(&self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::News => "news",
            Self::Pdf => "pdf",
            Self::Paper => "paper",
            Self::Tweet => "tweet",
            Self::Repository => "repository",
            Self::Movie => "movie",
            Self::Song => "song",
            Self::PersonalSite => "personal-site",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace('_', "-");
        Category::ALL
            .iter()
            .find(|c| c.cli_name() == needle || c.as_str() == needle.replace('-', " "))
            .copied()
            .ok_or_else(|| {
                let names: Vec<&str> = Category::ALL.iter().map(|c| c.cli_name()).collect();
                format!(
                    "unknown category '{}' (expected one of: {})",
                    s,
                    names.join(", ")
                )
            })
    }
}

/// A validated search request, serialized as the provider's JSON body.
///
/// Only [`crate::query::build_request`] constructs one from user input, so
/// the fields always satisfy its invariants: non-empty query, positive
/// result count, and non-empty normalized domain lists.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    /// Left to the provider's default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_results: Option<u64>,
    #[serde(rename = "type")]
    pub search_type: SearchType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_date_bound"
    )]
    pub start_published_date: Option<DateTime<Utc>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_date_bound"
    )]
    pub end_published_date: Option<DateTime<Utc>>,
}

fn serialize_date_bound<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(d) => serializer.serialize_str(&d.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => serializer.serialize_none(),
    }
}
