//! Default values shared by config structs and their `Default` impls.

pub const DEFAULT_DB_PATH: &str = "attendance.db";

/// Minimum seconds between two accepted check-ins for one identifier.
pub const DEFAULT_COOLDOWN_SECS: u64 = 60;

pub const DEFAULT_SERIAL_PORT: &str = "/dev/ttyACM0";
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Backoff after a transport read error before retrying.
pub const DEFAULT_READ_RETRY_MILLIS: u64 = 200;
