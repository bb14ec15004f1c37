//! AI provider configuration.

use serde::Serialize;
use std::fmt;
use std::time::Duration;

use super::redact;

/// AI completion provider settings.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct AiConfig {
    /// API key (`OPENAI_API_KEY`). Absent unless set in the environment.
    #[serde(serialize_with = "redact::optional_secret")]
    pub api_key: Option<String>,
    /// Request timeout in milliseconds.
    pub timeout: u64,
    /// Retry budget for failed requests. Stored only.
    pub max_retries: u32,
}

impl AiConfig {
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| redact::REDACTED))
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}
