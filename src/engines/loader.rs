//! Provider loader for initializing the search provider from configuration

use super::exa::Exa;
use super::traits::SearchProvider;
use crate::config::Settings;
use crate::error::Error;
use crate::network::HttpClient;
use std::sync::Arc;
use tracing::info;

/// Loader for initializing the configured provider
pub struct ProviderLoader;

impl ProviderLoader {
    /// Create the provider named in `settings.provider.engine`.
    ///
    /// Fails before any network traffic if the provider is unknown or the API
    /// key is missing.
    pub fn load(settings: &Settings, client: HttpClient) -> Result<Arc<dyn SearchProvider>, Error> {
        let provider_settings = &settings.provider;

        let api_key = provider_settings.api_key.clone().ok_or_else(|| {
            Error::Config(format!(
                "no API key configured for provider '{}' (set EXA_API_KEY or provider.api_key)",
                provider_settings.engine
            ))
        })?;

        let provider: Arc<dyn SearchProvider> = match provider_settings.engine.as_str() {
            "exa" => Arc::new(Exa::new(client, &provider_settings.base_url, api_key)?),
            other => {
                return Err(Error::Config(format!(
                    "unknown provider '{}' (available: {})",
                    other,
                    Self::available_providers().join(", ")
                )));
            }
        };

        info!(
            "Loaded provider: {} ({})",
            provider.name(),
            provider_settings.base_url
        );
        Ok(provider)
    }

    /// Get list of available provider types
    pub fn available_providers() -> Vec<&'static str> {
        vec!["exa"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    #[test]
    fn test_missing_api_key() {
        let mut settings = Settings::default();
        settings.provider.api_key = None;

        let result = ProviderLoader::load(&settings, HttpClient::new().unwrap());
        assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("EXA_API_KEY")));
    }

    #[test]
    fn test_unknown_provider() {
        let mut settings = Settings::default();
        settings.provider.engine = "bing".to_string();
        settings.provider.api_key = Some(ApiKey::new("k"));

        let result = ProviderLoader::load(&settings, HttpClient::new().unwrap());
        assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("unknown provider")));
    }

    #[test]
    fn test_load_exa() {
        let mut settings = Settings::default();
        settings.provider.api_key = Some(ApiKey::new("k"));

        let provider = ProviderLoader::load(&settings, HttpClient::new().unwrap()).unwrap();
        assert_eq!(provider.name(), "exa");
    }
}
