//! Configuration: serde structs with defaults, TOML loading, and
//! environment-variable overrides. The bootstrap layer owns where the
//! values come from; the core only consumes the resulting struct.

pub mod defaults;
pub mod ingest_config;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{TallyError, TallyResult};

pub use ingest_config::IngestConfig;

/// Top-level configuration for the attendance system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    /// Storage location of the SQLite database.
    pub db_path: PathBuf,
    pub ingest: IngestConfig,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(defaults::DEFAULT_DB_PATH),
            ingest: IngestConfig::default(),
        }
    }
}

impl TallyConfig {
    /// Parse a TOML document; missing fields fall back to defaults.
    pub fn from_toml_str(raw: &str) -> TallyResult<Self> {
        toml::from_str(raw).map_err(|e| TallyError::Config {
            message: e.to_string(),
        })
    }

    /// Defaults overridden by the deployment environment variables:
    /// `ATTENDANCE_DB`, `COOLDOWN`, `SERIAL_PORT`, `BAUDRATE`.
    pub fn from_env() -> TallyResult<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Apply environment-variable overrides to this config.
    pub fn apply_env(&mut self) -> TallyResult<()> {
        if let Ok(path) = std::env::var("ATTENDANCE_DB") {
            self.db_path = PathBuf::from(path);
        }
        if let Ok(raw) = std::env::var("COOLDOWN") {
            self.ingest.cooldown_secs = parse_env("COOLDOWN", &raw)?;
        }
        if let Ok(port) = std::env::var("SERIAL_PORT") {
            self.ingest.serial_port = port;
        }
        if let Ok(raw) = std::env::var("BAUDRATE") {
            self.ingest.baud_rate = parse_env("BAUDRATE", &raw)?;
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, raw: &str) -> TallyResult<T> {
    raw.trim().parse().map_err(|_| TallyError::Config {
        message: format!("{name} must be an integer, got \"{raw}\""),
    })
}
