//! Configuration error types.

use thiserror::Error;

/// Error raised while priming or rendering configuration.
///
/// Resolution itself never fails; these cover the `.env` adapter and output.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
    #[error("failed to render settings: {0}")]
    Render(#[from] serde_yaml::Error),
}
