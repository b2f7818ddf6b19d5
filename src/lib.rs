//! semsearch: query a semantic search provider and print the results
//!
//! A query string and a closed set of options are validated into a
//! [`SearchRequest`], sent once to a [`SearchProvider`], and the returned
//! records are rendered line by line.

pub mod config;
pub mod engines;
pub mod error;
pub mod network;
pub mod query;
pub mod results;
pub mod search;

pub use config::Settings;
pub use engines::SearchProvider;
pub use error::{Error, ProviderError, ProviderErrorKind, ValidationError};
pub use query::{build_request, normalize_domain, SearchOptions};
pub use results::{render, RenderStyle, SearchResponse, SearchResult};
pub use search::{Category, Search, SearchRequest, SearchType};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for provider requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 15;

/// Maximum timeout that can be set
pub const MAX_TIMEOUT: u64 = 30;
