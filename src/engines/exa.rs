//! Exa search provider implementation
//!
//! Uses the official JSON API: `POST /search` with an `x-api-key` header.

use super::traits::*;
use crate::config::ApiKey;
use crate::error::{Error, ProviderError, ProviderErrorKind};
use crate::network::HttpClient;
use crate::results::SearchResponse;
use crate::search::SearchRequest;
use async_trait::async_trait;
use tracing::{debug, info, warn};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.exa.ai";

/// Exa semantic search provider
pub struct Exa {
    client: HttpClient,
    search_url: String,
    api_key: ApiKey,
}

impl Exa {
    pub fn new(client: HttpClient, base_url: &str, api_key: ApiKey) -> Result<Self, Error> {
        let base = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
            .map_err(|e| Error::Config(format!("invalid provider base_url '{}': {}", base_url, e)))?;
        let search_url = base
            .join("search")
            .map_err(|e| Error::Config(format!("invalid provider base_url '{}': {}", base_url, e)))?;

        Ok(Self {
            client,
            search_url: search_url.to_string(),
            api_key,
        })
    }

    /// Build the HTTP request for a search
    pub fn request(&self, request: &SearchRequest) -> Result<EngineRequest, ProviderError> {
        let body = serde_json::to_value(request).map_err(|e| {
            ProviderError::new(ProviderErrorKind::BadRequest)
                .with_message(format!("failed to encode request: {}", e))
        })?;

        Ok(EngineRequest::post(&self.search_url)
            .header("x-api-key", self.api_key.expose())
            .json(body))
    }

    /// Parse the HTTP response into results
    pub fn response(&self, response: EngineResponse) -> Result<SearchResponse, ProviderError> {
        if !response.is_success() {
            let mut error = ProviderError::new(ProviderErrorKind::from_status(response.status));
            if let Some(message) = response.error_message() {
                error = error.with_message(message);
            }
            return Err(error);
        }

        response.json::<SearchResponse>().map_err(|e| {
            ProviderError::new(ProviderErrorKind::Unavailable)
                .with_message(format!("failed to parse response: {}", e))
        })
    }
}

#[async_trait]
impl SearchProvider for Exa {
    fn name(&self) -> &str {
        "exa"
    }

    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ProviderError> {
        let engine_request = self.request(request)?;
        info!("Querying {} for '{}'", self.name(), request.query);

        let response = match self.client.execute(engine_request).await {
            Ok(response) => response,
            Err(e) => {
                let error = ProviderError::from(e);
                warn!("Request to {} failed: {}", self.name(), error);
                return Err(error);
            }
        };

        debug!("{} answered with HTTP {}", self.name(), response.status);

        let parsed = self.response(response);
        if let Err(ref e) = parsed {
            warn!("{} returned an error: {}", self.name(), e);
        }
        parsed
    }
}
