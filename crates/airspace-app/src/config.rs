//! Configuration loading for the host process.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use airspace_sim::config::SimConfig;
use airspace_sim::error::SimError;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "AIRSPACE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(#[from] SimError),
}

/// Parse and validate a config document.
pub fn parse_config(json: &str) -> Result<SimConfig, ConfigError> {
    let config: SimConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Load a config file. Missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<SimConfig, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&json)
}

/// Load from `AIRSPACE_CONFIG` when set, otherwise use defaults.
pub fn config_from_env() -> Result<SimConfig, ConfigError> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            info!(path = %path.display(), "loading config");
            load_config(&path)
        }
        None => Ok(SimConfig::default()),
    }
}
