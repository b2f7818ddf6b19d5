//! Settings structures for semsearch configuration

use crate::engines::exa::DEFAULT_BASE_URL;
use crate::query::SearchOptions;
use crate::results::OutputFormat;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub provider: ProviderSettings,
    /// Default search options, overridden by command-line flags
    pub search: SearchOptions,
    pub output: OutputSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("EXA_API_KEY") {
            if !val.trim().is_empty() {
                self.provider.api_key = Some(ApiKey::new(val.trim()));
            }
        }
        if let Ok(val) = std::env::var("SEMSEARCH_BASE_URL") {
            self.provider.base_url = val;
        }
        if let Ok(val) = std::env::var("SEMSEARCH_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.outgoing.request_timeout = timeout;
            }
        }
    }
}

/// API credential. Never printed by `Debug` and never serialized back out.
#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for attaching to outbound requests only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl Serialize for ApiKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str("***")
    }
}

/// Search provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Provider implementation to use
    pub engine: String,
    /// API root, without the `/search` path
    pub base_url: String,
    /// API key (prefer the EXA_API_KEY environment variable)
    pub api_key: Option<ApiKey>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            engine: "exa".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    /// Show id, score, date and author in text output
    pub detailed: bool,
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Upper bound applied to request_timeout
    pub max_request_timeout: f64,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// Extra headers to send
    pub extra_headers: HashMap<String, String>,
}

impl OutgoingSettings {
    /// Request timeout clamped to `max_request_timeout`
    pub fn effective_timeout(&self) -> Duration {
        let secs = self.request_timeout.min(self.max_request_timeout);
        if secs.is_finite() && secs > 0.0 {
            Duration::from_secs_f64(secs)
        } else {
            Duration::from_secs(crate::DEFAULT_TIMEOUT)
        }
    }
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: crate::DEFAULT_TIMEOUT as f64,
            max_request_timeout: crate::MAX_TIMEOUT as f64,
            verify_ssl: true,
            proxies: ProxySettings::default(),
            extra_headers: HashMap::new(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Category, SearchType};

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.provider.engine, "exa");
        assert_eq!(settings.provider.base_url, "https://api.exa.ai");
        assert!(settings.provider.api_key.is_none());
        assert_eq!(settings.outgoing.effective_timeout(), Duration::from_secs(15));
        assert_eq!(settings.search, SearchOptions::default());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
provider:
  api_key: secret-key
search:
  num_results: 5
  search_type: keyword
  include_domains: [instagram.com]
  category: personal-site
output:
  format: json
outgoing:
  request_timeout: 10
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.provider.engine, "exa");
        assert_eq!(settings.provider.api_key.as_ref().map(ApiKey::expose), Some("secret-key"));
        assert_eq!(settings.search.num_results, Some(5));
        assert_eq!(settings.search.search_type, Some(SearchType::Keyword));
        assert_eq!(settings.search.category, Some(Category::PersonalSite));
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert_eq!(settings.outgoing.effective_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_unknown_search_option_is_rejected() {
        let yaml = "search:\n  num_result: 5\n";
        assert!(serde_yaml::from_str::<Settings>(yaml).is_err());
    }

    #[test]
    fn test_api_key_is_redacted() {
        let mut settings = Settings::default();
        settings.provider.api_key = Some(ApiKey::new("super-secret"));

        let debug = format!("{:?}", settings);
        assert!(!debug.contains("super-secret"));

        let yaml = serde_yaml::to_string(&settings).unwrap();
        assert!(!yaml.contains("super-secret"));
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let outgoing = OutgoingSettings {
            request_timeout: -1.0,
            ..Default::default()
        };
        assert_eq!(outgoing.effective_timeout(), Duration::from_secs(15));
    }
}
