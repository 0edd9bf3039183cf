//! Configuration loading from disk and environment.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::CatalogConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable that overrides the listener port.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<CatalogConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: CatalogConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Build the runtime configuration: file (or defaults), then environment
/// overrides, then validation.
pub fn resolve_config(path: Option<&Path>) -> Result<CatalogConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => CatalogConfig::default(),
    };

    if let Ok(port) = std::env::var(PORT_ENV) {
        apply_port_override(&mut config, &port);
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Replace the listener port with `port` if it is a valid port number.
///
/// Returns whether the override was applied.
pub fn apply_port_override(config: &mut CatalogConfig, port: &str) -> bool {
    let Ok(port) = port.trim().parse::<u16>() else {
        tracing::warn!(value = %port, "Ignoring invalid {} value", PORT_ENV);
        return false;
    };

    match config.listener.bind_address.parse::<SocketAddr>() {
        Ok(mut addr) => {
            addr.set_port(port);
            config.listener.bind_address = addr.to_string();
        }
        Err(_) => {
            config.listener.bind_address = format!("0.0.0.0:{port}");
        }
    }
    true
}
