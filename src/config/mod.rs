//! Settings resolution for the stock service.
//!
//! Layers three sources, lowest priority first: built-in defaults, the preset
//! picked by `NODE_ENV`/`APP_ENV`, then individual environment variables.
//! Resolution never fails; malformed values fall back to the preset default.

mod ai;
mod api;
mod cache;
pub mod dotenv;
pub mod env;
mod error;
mod logging;
mod preset;
mod redact;
mod server;

pub use ai::AiConfig;
pub use api::ApiConfig;
pub use cache::CacheConfig;
pub use env::Env;
pub use error::ConfigError;
pub use logging::LoggingConfig;
pub use preset::{PLACEHOLDER_STOCK_API_KEY, Preset};
pub use server::ServerConfig;

use serde::Serialize;
use tracing::{debug, info};

/// Fully resolved settings, built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Bind address and selected preset.
    pub server: ServerConfig,
    /// Stock data provider.
    pub api: ApiConfig,
    /// Log verbosity.
    pub logging: LoggingConfig,
    /// Response cache flag and TTL.
    pub cache: CacheConfig,
    /// AI completion provider.
    pub ai: AiConfig,
    /// Variables whose values were rejected during resolution.
    #[serde(skip)]
    pub fallbacks: Vec<String>,
}

/// Resolve settings from an environment snapshot.
pub fn resolve(vars: &Env) -> Settings {
    let preset = Preset::from_name(vars.first_of(&[env::NODE_ENV, env::APP_ENV]));
    let defaults = preset.settings();

    debug!(preset = %preset, vars = vars.len(), "resolving settings");

    let mut fallbacks = Vec::new();
    Settings {
        server: ServerConfig {
            port: vars.number_or(env::PORT, defaults.server.port, &mut fallbacks),
            host: vars.string_or(&[env::HOST], defaults.server.host),
            env: defaults.server.env,
        },
        api: ApiConfig {
            stock_api_key: vars.string_or(
                &[env::STOCK_API_KEY, env::POLYGON_API_KEY],
                defaults.api.stock_api_key,
            ),
            stock_api_url: vars.string_or(&[env::STOCK_API_URL], defaults.api.stock_api_url),
            timeout: vars.number_or(env::API_TIMEOUT, defaults.api.timeout, &mut fallbacks),
        },
        logging: LoggingConfig {
            level: vars.string_or(&[env::LOG_LEVEL], defaults.logging.level),
        },
        cache: CacheConfig {
            enabled: vars.flag_or(
                &[env::CACHE_ENABLED, env::ENABLE_CACHE],
                defaults.cache.enabled,
            ),
            ttl: vars.number_or(env::CACHE_TTL, defaults.cache.ttl, &mut fallbacks),
        },
        ai: AiConfig {
            api_key: vars
                .get(env::OPENAI_API_KEY)
                .map(str::to_string)
                .or(defaults.ai.api_key),
            timeout: vars.number_or(env::OPENAI_TIMEOUT, defaults.ai.timeout, &mut fallbacks),
            max_retries: vars.number_or(
                env::OPENAI_MAX_RETRIES,
                defaults.ai.max_retries,
                &mut fallbacks,
            ),
        },
        fallbacks,
    }
}

impl Settings {
    /// Resolve settings from an environment snapshot.
    pub fn resolve(vars: &Env) -> Self {
        resolve(vars)
    }

    /// Resolve settings from the current process environment.
    ///
    /// Load a `.env` file first (see [`dotenv::load`]) if one should apply.
    pub fn from_env() -> Self {
        resolve(&Env::from_process())
    }

    /// Resolve settings from arbitrary name/value pairs.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        resolve(&Env::from_vars(vars))
    }

    /// The preset these settings were resolved under.
    pub fn preset(&self) -> Preset {
        Preset::from_name(Some(self.server.env.as_str()))
    }

    pub fn is_production(&self) -> bool {
        self.preset() == Preset::Production
    }

    /// Non-fatal notices about the resolved values, starting with rejected
    /// variables.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = self.fallbacks.clone();

        if self.is_production() && self.api.uses_placeholder_key() {
            warnings.push(format!(
                "api.stock_api_key is the placeholder {:?} in production (set {} or {})",
                PLACEHOLDER_STOCK_API_KEY,
                env::STOCK_API_KEY,
                env::POLYGON_API_KEY
            ));
        }

        if !self.ai.is_configured() {
            warnings.push(format!(
                "ai.api_key is not set (set {} to enable AI features)",
                env::OPENAI_API_KEY
            ));
        }

        if self.cache.enabled && self.cache.ttl == 0 {
            warnings.push("cache is enabled with a ttl of 0 seconds".to_string());
        }

        warnings
    }

    /// Log a one-line summary without secrets.
    pub fn log_summary(&self) {
        info!(
            preset = %self.server.env,
            addr = %self.server.addr(),
            log_level = %self.logging.level,
            cache_enabled = self.cache.enabled,
            cache_ttl = self.cache.ttl,
            ai_configured = self.ai.is_configured(),
            "Settings resolved"
        );
    }

    /// Render as YAML with secrets redacted.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
