//! Application configuration.
//!
//! A JSON document with every field optional:
//!
//! ```json
//! { "log_level": "info", "log_dir": "/var/log/decibl",
//!   "db_path": "/var/lib/decibl/store.sqlite3",
//!   "latency": { "get_ms": 50 } }
//! ```

use crate::latency::LatencyProfile;
use crate::logging::default_log_level;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files. `None` disables file logs.
    pub log_dir: Option<PathBuf>,
    /// Settings database file. `None` keeps settings in memory.
    pub db_path: Option<PathBuf>,
    pub latency: LatencyProfile,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            db_path: None,
            latency: LatencyProfile::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl AppConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(ConfigError::Parse)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError};
    use std::path::PathBuf;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(AppConfig::from_json_str("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_latency_overrides_single_operation() {
        let config = AppConfig::from_json_str(
            r#"{"log_level":"warn","db_path":"/tmp/decibl.sqlite3","latency":{"get_ms":5}}"#,
        )
        .unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/decibl.sqlite3")));
        assert_eq!(config.latency.get_ms, 5);
        assert_eq!(config.latency.create_ms, 400);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = AppConfig::from_path("/nonexistent/decibl.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/decibl.json"));
    }
}
