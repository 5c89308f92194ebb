//! Client configuration: defaults, TOML file, environment and CLI overrides.

mod loader;
mod types;

pub use loader::{ConfigError, MONITOR_URL_ENV};
pub use types::{ApiConfig, Config};
