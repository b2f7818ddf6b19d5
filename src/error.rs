//! Error types shared by the request builder, providers and the CLI

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a search request.
///
/// These are always detected before any network call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The query was empty after trimming
    #[error("query is empty")]
    EmptyQuery,

    /// The requested result count is not a positive integer
    #[error("invalid result count {0}: must be a positive integer")]
    InvalidResultCount(i64),

    /// A domain filter entry is not a bare hostname
    #[error("malformed domain '{0}': expected a hostname such as example.com")]
    MalformedDomain(String),

    /// Both include and exclude domain filters were given
    #[error("include and exclude domain filters cannot be combined")]
    ConflictingDomainFilters,

    /// A date bound could not be parsed
    #[error("malformed date '{0}': expected YYYY-MM-DD or RFC 3339")]
    MalformedDate(String),

    /// The start date bound is after the end date bound
    #[error("start published date is after end published date")]
    InvalidDateRange,
}

/// Kind of failure reported by a search provider
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProviderErrorKind {
    AuthError,
    RateLimited,
    Timeout,
    Unavailable,
    BadRequest,
}

impl ProviderErrorKind {
    /// Map an HTTP status code onto a failure kind
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::AuthError,
            429 => Self::RateLimited,
            408 | 504 => Self::Timeout,
            500..=599 => Self::Unavailable,
            _ => Self::BadRequest,
        }
    }
}

impl std::fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthError => write!(f, "authentication failed"),
            Self::RateLimited => write!(f, "rate limited"),
            Self::Timeout => write!(f, "request timed out"),
            Self::Unavailable => write!(f, "provider unavailable"),
            Self::BadRequest => write!(f, "bad request"),
        }
    }
}

/// Failure of a call to the search provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    /// Message reported by the provider, if any
    pub message: Option<String>,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message {
            Some(ref message) => write!(f, "{}: {}", self.kind, message),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for ProviderError {}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ProviderErrorKind::Timeout
        } else if let Some(status) = err.status() {
            ProviderErrorKind::from_status(status.as_u16())
        } else {
            ProviderErrorKind::Unavailable
        };
        Self::new(kind).with_message(err.to_string())
    }
}

/// Top-level error for a search run
#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
