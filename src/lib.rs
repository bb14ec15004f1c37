//! Environment-driven settings for the stock service.
//!
//! ```no_run
//! use stock_settings::config::{Settings, dotenv};
//!
//! dotenv::load().ok();
//! let settings = Settings::from_env();
//! println!("listening on {}", settings.server.addr());
//! ```

pub mod config;

pub use config::{ConfigError, Env, Preset, Settings, resolve};
