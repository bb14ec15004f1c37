//! HTTP server configuration.

use serde::Serialize;

/// Bind address and deployment environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    /// Listen port (`PORT`).
    pub port: u16,
    /// Listen host (`HOST`).
    pub host: String,
    /// Name of the selected preset: "development" or "production".
    pub env: String,
}

impl ServerConfig {
    /// Returns the `host:port` bind address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
