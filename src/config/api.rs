//! Stock data API configuration.

use serde::Serialize;
use std::fmt;
use std::time::Duration;

use super::preset::PLACEHOLDER_STOCK_API_KEY;
use super::redact;

/// Stock market data provider settings.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ApiConfig {
    /// API key (`STOCK_API_KEY`, falling back to `POLYGON_API_KEY`).
    #[serde(serialize_with = "redact::secret")]
    pub stock_api_key: String,
    /// Base URL of the provider.
    pub stock_api_url: String,
    /// Request timeout in milliseconds.
    pub timeout: u64,
}

impl ApiConfig {
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }

    /// True while the development placeholder key is in use.
    pub fn uses_placeholder_key(&self) -> bool {
        self.stock_api_key == PLACEHOLDER_STOCK_API_KEY
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("stock_api_key", &redact::REDACTED)
            .field("stock_api_url", &self.stock_api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
