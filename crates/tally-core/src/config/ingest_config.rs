use serde::{Deserialize, Serialize};

use super::defaults;

/// Ingestion subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Minimum seconds between two accepted check-ins per identifier.
    pub cooldown_secs: u64,
    /// Sensor transport device. Opaque to the core; only the resulting
    /// line stream matters.
    pub serial_port: String,
    pub baud_rate: u32,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            cooldown_secs: defaults::DEFAULT_COOLDOWN_SECS,
            serial_port: defaults::DEFAULT_SERIAL_PORT.to_string(),
            baud_rate: defaults::DEFAULT_BAUD_RATE,
        }
    }
}
