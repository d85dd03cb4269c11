//! Environment-driven configuration.
//!
//! # Responsibility
//! - Resolve the store location from the process environment.
//!
//! # Invariants
//! - The environment is read per invocation, never cached in a global.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Environment variable naming the SQLite database file backing the store.
pub const STORE_PATH_ENV: &str = "MOVEMENTS_DB";

/// Resolved store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    MissingVar(&'static str),
    EmptyVar(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingVar(name) => write!(f, "environment variable `{name}` is not set"),
            Self::EmptyVar(name) => write!(f, "environment variable `{name}` is empty"),
        }
    }
}

impl Error for ConfigError {}

/// Reads the store configuration from the process environment.
pub fn store_config_from_env() -> Result<StoreConfig, ConfigError> {
    store_config_from_value(env::var(STORE_PATH_ENV).ok())
}

fn store_config_from_value(value: Option<String>) -> Result<StoreConfig, ConfigError> {
    let raw = value.ok_or(ConfigError::MissingVar(STORE_PATH_ENV))?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyVar(STORE_PATH_ENV));
    }
    Ok(StoreConfig {
        db_path: PathBuf::from(trimmed),
    })
}

#[cfg(test)]
mod tests {
    use super::{store_config_from_value, ConfigError, STORE_PATH_ENV};
    use std::path::PathBuf;

    #[test]
    fn missing_variable_is_rejected() {
        let error = store_config_from_value(None).unwrap_err();
        assert_eq!(error, ConfigError::MissingVar(STORE_PATH_ENV));
    }

    #[test]
    fn blank_variable_is_rejected() {
        let error = store_config_from_value(Some("   ".to_string())).unwrap_err();
        assert_eq!(error, ConfigError::EmptyVar(STORE_PATH_ENV));
    }

    #[test]
    fn path_is_trimmed_and_kept_verbatim_otherwise() {
        let config = store_config_from_value(Some(" /data/movements.db ".to_string())).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/data/movements.db"));
    }
}
