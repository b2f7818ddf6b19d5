//! Search orchestration module
//!
//! Holds the request model and runs one request against a provider.

mod executor;
mod models;

pub use executor::Search;
pub use models::*;
