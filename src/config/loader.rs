//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::ProxyConfig;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ProxyConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ProxyConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Apply environment overrides. `PORT` takes precedence over the file value.
pub fn apply_env(config: &mut ProxyConfig) -> Result<(), ConfigError> {
    if let Ok(port) = std::env::var("PORT") {
        config.listener.port = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;
    }
    Ok(())
}
