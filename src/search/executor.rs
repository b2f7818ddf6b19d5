//! Search execution

use crate::engines::SearchProvider;
use crate::error::Result;
use crate::query::{build_request, SearchOptions};
use crate::results::SearchResponse;
use crate::search::SearchRequest;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs a single request/response cycle against one provider
pub struct Search {
    provider: Arc<dyn SearchProvider>,
}

impl Search {
    /// Create a new search executor
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    /// Build a request from `raw_query` and `options`, then call the provider
    /// exactly once. Validation failures never reach the network.
    pub async fn execute(&self, raw_query: &str, options: &SearchOptions) -> Result<SearchResponse> {
        let request = build_request(raw_query, options)?;
        self.send(&request).await
    }

    /// Call the provider exactly once with an already validated request
    pub async fn send(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let start = Instant::now();

        debug!(
            "Sending '{}' to {} with {:?}",
            request.query,
            self.provider.name(),
            request.include_domains
        );

        let response = self.provider.search(request).await?;
        let elapsed = start.elapsed();

        if let Some(limit) = request.num_results {
            if response.len() as u64 > limit {
                warn!(
                    "{} returned {} results, more than the {} requested",
                    self.provider.name(),
                    response.len(),
                    limit
                );
            }
        }

        info!(
            "{} returned {} results in {:?}",
            self.provider.name(),
            response.len(),
            elapsed
        );

        Ok(response)
    }
}
