//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error raised while loading or validating a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Read {
        path: String,
        source: std::io::Error,
    },
    /// The file is not valid TOML for the schema.
    Parse {
        path: String,
        source: toml::de::Error,
    },
    /// The file deserialized but fails semantic validation.
    Invalid(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "cannot read config file {}: {}", path, source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "cannot parse config file {}: {}", path, source)
            }
            ConfigError::Invalid(errors) => {
                writeln!(f, "invalid configuration:")?;
                for error in errors {
                    writeln!(f, "  - {}", error)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate a TOML configuration file.
///
/// Any failure here is fatal at startup; the process must not take
/// traffic with a half-usable configuration.
pub fn load_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let shown = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: shown.clone(),
        source,
    })?;
    let config: RelayConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: shown,
        source,
    })?;

    validate_config(&config).map_err(ConfigError::Invalid)?;

    Ok(config)
}
