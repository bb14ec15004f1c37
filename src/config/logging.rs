//! Logging configuration.

use serde::Serialize;
use tracing::Level;

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggingConfig {
    /// Logging verbosity: "trace", "debug", "info", "warn", "error".
    pub level: String,
}

impl LoggingConfig {
    /// Maps `level` to a tracing level. Unknown values fall back to INFO.
    pub fn tracing_level(&self) -> Level {
        match self.level.trim().to_ascii_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" | "warning" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}
