//! HTTP networking module
//!
//! Provides the HTTP client used by search providers.

mod client;

pub use client::HttpClient;
