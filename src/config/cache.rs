//! Cache configuration.

use serde::Serialize;
use std::time::Duration;

/// Response cache settings. Stored only; nothing in this crate enforces them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheConfig {
    pub enabled: bool,
    /// Entry lifetime in seconds.
    pub ttl: u64,
}

impl CacheConfig {
    pub fn ttl_duration(&self) -> Duration {
        Duration::from_secs(self.ttl)
    }
}
