//! Request building module
//!
//! Turns a raw user query plus a closed set of options into a validated
//! [`SearchRequest`]. Handles:
//! - Query trimming and emptiness checks
//! - Result count validation (the provider default applies when unset)
//! - Domain filter normalization: `https://www.example.com/` -> `www.example.com`
//! - Published date bounds: `YYYY-MM-DD` or RFC 3339

use crate::error::ValidationError;
use crate::search::{Category, SearchRequest, SearchType};
use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

static HOSTNAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*$")
        .expect("hostname pattern is valid")
});

const MAX_HOSTNAME_LEN: usize = 253;

/// Options accepted alongside a query.
///
/// Unknown fields are rejected when loaded from a settings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SearchOptions {
    /// Number of results; `None` leaves the choice to the provider
    pub num_results: Option<i64>,
    pub search_type: Option<SearchType>,
    pub include_domains: Vec<String>,
    pub exclude_domains: Vec<String>,
    pub category: Option<Category>,
    pub start_published_date: Option<String>,
    pub end_published_date: Option<String>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_num_results(mut self, n: i64) -> Self {
        self.num_results = Some(n);
        self
    }

    pub fn with_search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = Some(search_type);
        self
    }

    pub fn include_domain(mut self, domain: impl Into<String>) -> Self {
        self.include_domains.push(domain.into());
        self
    }

    pub fn exclude_domain(mut self, domain: impl Into<String>) -> Self {
        self.exclude_domains.push(domain.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_date_range(
        mut self,
        start: Option<impl Into<String>>,
        end: Option<impl Into<String>>,
    ) -> Self {
        self.start_published_date = start.map(Into::into);
        self.end_published_date = end.map(Into::into);
        self
    }

    /// Overlay `overrides` on top of these options. Set values in `overrides`
    /// win. Domain filters are replaced as a pair: any include or exclude
    /// domain in `overrides` clears both lists from `self`.
    pub fn merge(mut self, overrides: SearchOptions) -> Self {
        if overrides.num_results.is_some() {
            self.num_results = overrides.num_results;
        }
        if overrides.search_type.is_some() {
            self.search_type = overrides.search_type;
        }
        if !overrides.include_domains.is_empty() || !overrides.exclude_domains.is_empty() {
            self.include_domains = overrides.include_domains;
            self.exclude_domains = overrides.exclude_domains;
        }
        if overrides.category.is_some() {
            self.category = overrides.category;
        }
        if overrides.start_published_date.is_some() {
            self.start_published_date = overrides.start_published_date;
        }
        if overrides.end_published_date.is_some() {
            self.end_published_date = overrides.end_published_date;
        }
        self
    }
}

/// Build a validated search request from a raw query and options
pub fn build_request(
    raw_query: &str,
    options: &SearchOptions,
) -> Result<SearchRequest, ValidationError> {
    let query = raw_query.trim();
    if query.is_empty() {
        return Err(ValidationError::EmptyQuery);
    }

    let num_results = options
        .num_results
        .map(|n| {
            u64::try_from(n)
                .ok()
                .filter(|&count| count > 0)
                .ok_or(ValidationError::InvalidResultCount(n))
        })
        .transpose()?;

    let include_domains = normalize_domains(&options.include_domains)?;
    let exclude_domains = normalize_domains(&options.exclude_domains)?;
    if include_domains.is_some() && exclude_domains.is_some() {
        return Err(ValidationError::ConflictingDomainFilters);
    }

    let start_published_date = options
        .start_published_date
        .as_deref()
        .map(parse_date_bound)
        .transpose()?;
    let end_published_date = options
        .end_published_date
        .as_deref()
        .map(parse_date_bound)
        .transpose()?;
    if let (Some(start), Some(end)) = (start_published_date, end_published_date) {
        if start > end {
            return Err(ValidationError::InvalidDateRange);
        }
    }

    let request = SearchRequest {
        query: query.to_string(),
        num_results,
        search_type: options.search_type.unwrap_or_default(),
        include_domains,
        exclude_domains,
        category: options.category,
        start_published_date,
        end_published_date,
    };

    debug!(
        "Built {} request for '{}' (num_results: {:?})",
        request.search_type.as_str(),
        request.query,
        request.num_results
    );

    Ok(request)
}

/// Normalize a domain filter entry to a bare lowercase hostname.
///
/// A leading `http://` or `https://` and trailing slashes are stripped, so
/// `https://www.instagram.com/` and `www.instagram.com` are equivalent.
pub fn normalize_domain(raw: &str) -> Result<String, ValidationError> {
    let lowered = raw.trim().to_lowercase();
    let without_scheme = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
        .unwrap_or(&lowered);
    let host = without_scheme.trim_end_matches('/');

    if host.is_empty() || host.len() > MAX_HOSTNAME_LEN || !HOSTNAME_RE.is_match(host) {
        return Err(ValidationError::MalformedDomain(raw.to_string()));
    }

    Ok(host.to_string())
}

/// Normalize a list of domains, dropping duplicates. An empty list is `None`.
fn normalize_domains(raw: &[String]) -> Result<Option<Vec<String>>, ValidationError> {
    let mut domains: Vec<String> = Vec::with_capacity(raw.len());
    for entry in raw {
        let domain = normalize_domain(entry)?;
        if !domains.contains(&domain) {
            domains.push(domain);
        }
    }

    Ok(if domains.is_empty() { None } else { Some(domains) })
}

/// Parse a published-date bound given as `YYYY-MM-DD` (midnight UTC) or RFC 3339
pub fn parse_date_bound(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    let trimmed = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| ValidationError::MalformedDate(raw.to_string()))
}
