//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_monitor;

use banana_client::api::ApiClient;
use banana_client::config::ApiConfig;
use std::path::PathBuf;
use tempfile::TempDir;

pub use mock_monitor::{CapturedRequest, MockMonitor, MockResponse};

/// API config pointing at `base_url` with short timeouts.
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 1,
        connect_timeout_seconds: 1,
    }
}

/// Client wired to a running mock monitor.
pub fn client_for(monitor: &MockMonitor) -> ApiClient {
    ApiClient::new(&api_config(&monitor.base_url())).expect("Failed to build client")
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("client.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
