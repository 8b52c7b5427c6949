use std::time::Duration;

use crate::content::ContentType;
use crate::errors::ClientError;

/// Default gateway origin plus stage path.
pub const DEFAULT_BASE_URL: &str =
    "https://m0zpgns4ce.execute-api.us-east-1.amazonaws.com/stg-public";

/// Configuration for the gateway HTTP client.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// API key sent as the `x-api-key` header.
    pub api_key: String,
    /// Base URL for the gateway.
    ///
    /// Useful for proxies or local test servers.
    pub base_url: String,
    /// HTTP timeout for each request.
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Creates a config with the fixed production gateway and a provided
    /// API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Builds a config from `TRAVELGEN_API_KEY`, honoring an optional
    /// `TRAVELGEN_BASE_URL` override.
    pub fn from_env() -> Result<Self, ClientError> {
        let api_key = std::env::var("TRAVELGEN_API_KEY").unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(ClientError::validation("Please enter your API key."));
        }
        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var("TRAVELGEN_BASE_URL")
            && !base_url.trim().is_empty()
        {
            config.base_url = base_url;
        }
        Ok(config)
    }

    /// Overrides the gateway base URL (for proxies or test servers).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the HTTP timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn endpoint_url(&self, content_type: ContentType) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            content_type.endpoint_path()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_base_and_path() {
        let config = GatewayConfig::new("key");
        assert_eq!(
            config.endpoint_url(ContentType::MasterItinerary),
            format!("{DEFAULT_BASE_URL}/generate-master-itinerary")
        );
    }

    #[test]
    fn endpoint_url_tolerates_trailing_slash() {
        let config = GatewayConfig::new("key").base_url("http://localhost:8080/stage/");
        assert_eq!(
            config.endpoint_url(ContentType::FreeFormat),
            "http://localhost:8080/stage/generate-free-format-content"
        );
    }
}
