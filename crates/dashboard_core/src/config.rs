//! Process configuration loaded once at startup.
//!
//! # Responsibility
//! - Parse environment variables into a typed, immutable `AppConfig`.
//!
//! # Invariants
//! - `CONN_STR` is passed through untouched; a missing value is reported by
//!   the connector at connect time, not here.
//! - Lookup is injectable so parsing does not depend on process globals.

use crate::db::DbConfig;
use crate::logging::{default_log_level, normalize_level, normalize_log_dir};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const CONN_STR_VAR: &str = "CONN_STR";
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "LOG_DIR";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8501";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue {
        var: &'static str,
        value: String,
        message: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue {
                var,
                value,
                message,
            } => write!(f, "invalid {var} `{value}`: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Immutable application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db: DbConfig,
    pub bind_addr: SocketAddr,
    pub log_level: &'static str,
    /// `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let bind_value = get(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .trim()
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::InvalidValue {
                var: BIND_ADDR_VAR,
                value: bind_value.clone(),
                message: err.to_string(),
            })?;

        let log_level = match get(LOG_LEVEL_VAR) {
            Some(value) => normalize_level(&value).map_err(|message| ConfigError::InvalidValue {
                var: LOG_LEVEL_VAR,
                value: value.clone(),
                message,
            })?,
            None => default_log_level(),
        };

        let log_dir = get(LOG_DIR_VAR)
            .map(|value| {
                normalize_log_dir(&value).map_err(|message| ConfigError::InvalidValue {
                    var: LOG_DIR_VAR,
                    value: value.clone(),
                    message,
                })
            })
            .transpose()?;

        Ok(Self {
            db: DbConfig {
                conn_str: lookup(CONN_STR_VAR),
            },
            bind_addr,
            log_level,
            log_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, DEFAULT_BIND_ADDR};
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.db.conn_str, None);
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert!(config.log_dir.is_none());
        assert!(["debug", "info"].contains(&config.log_level));
    }

    #[test]
    fn values_are_parsed() {
        let config = config_from(&[
            ("CONN_STR", "file:/data/app.db?mode=ro"),
            ("BIND_ADDR", "0.0.0.0:9000"),
            ("LOG_LEVEL", "WARNING"),
            ("LOG_DIR", "/var/log/dashboard"),
        ])
        .unwrap();
        assert_eq!(config.db.conn_str.as_deref(), Some("file:/data/app.db?mode=ro"));
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.log_level, "warn");
        assert_eq!(
            config.log_dir.as_deref(),
            Some(std::path::Path::new("/var/log/dashboard"))
        );
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = config_from(&[("BIND_ADDR", "localhost")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid BIND_ADDR `localhost`"));

        let err = config_from(&[("LOG_LEVEL", "loud")]).unwrap_err();
        assert!(err.to_string().contains("LOG_LEVEL"));

        let err = config_from(&[("LOG_DIR", "relative/logs")]).unwrap_err();
        assert!(err.to_string().contains("absolute"));
    }
}
