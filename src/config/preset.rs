//! Built-in defaults and per-environment presets.

use std::fmt;

use super::{AiConfig, ApiConfig, CacheConfig, LoggingConfig, ServerConfig, Settings};

/// Placeholder stock key for local development. Never a real credential.
pub const PLACEHOLDER_STOCK_API_KEY: &str = "demo-api-key";

pub const DEFAULT_STOCK_API_URL: &str = "https://api.polygon.io";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
pub const DEFAULT_AI_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_AI_MAX_RETRIES: u32 = 3;

/// Deployment environment whose defaults are layered over the global ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Development,
    Production,
}

impl Preset {
    /// Picks `Production` only for the exact string "production".
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("production") => Preset::Production,
            _ => Preset::Development,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Development => "development",
            Preset::Production => "production",
        }
    }

    /// Complete settings for this preset with no environment overrides.
    pub fn settings(self) -> Settings {
        let base = Settings::default();

        match self {
            Preset::Development => Settings {
                logging: LoggingConfig {
                    level: "debug".to_string(),
                },
                cache: CacheConfig {
                    enabled: false,
                    ttl: 60,
                },
                ai: AiConfig {
                    max_retries: 2,
                    ..base.ai.clone()
                },
                ..base
            },
            Preset::Production => Settings {
                server: ServerConfig {
                    port: 8080,
                    host: "0.0.0.0".to_string(),
                    env: self.name().to_string(),
                },
                api: ApiConfig {
                    timeout: 5_000,
                    ..base.api.clone()
                },
                cache: CacheConfig {
                    enabled: true,
                    ttl: DEFAULT_CACHE_TTL_SECS,
                },
                ..base
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Global defaults, underneath every preset.
impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: DEFAULT_PORT,
                host: DEFAULT_HOST.to_string(),
                env: Preset::Development.name().to_string(),
            },
            api: ApiConfig {
                stock_api_key: PLACEHOLDER_STOCK_API_KEY.to_string(),
                stock_api_url: DEFAULT_STOCK_API_URL.to_string(),
                timeout: DEFAULT_API_TIMEOUT_MS,
            },
            logging: LoggingConfig {
                level: DEFAULT_LOG_LEVEL.to_string(),
            },
            cache: CacheConfig {
                enabled: false,
                ttl: DEFAULT_CACHE_TTL_SECS,
            },
            ai: AiConfig {
                api_key: None,
                timeout: DEFAULT_AI_TIMEOUT_MS,
                max_retries: DEFAULT_AI_MAX_RETRIES,
            },
            fallbacks: Vec::new(),
        }
    }
}
