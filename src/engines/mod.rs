//! Search provider module
//!
//! Defines the SearchProvider trait and the provider implementations.

mod loader;
mod traits;

// Provider implementations
pub mod exa;

pub use loader::ProviderLoader;
pub use traits::*;
