/// Tally system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix of a meaningful detection line from the sensor transport.
pub const DETECTION_PREFIX: &str = "FACE:";

/// Reserved identifier the sensor emits when no face is detected.
pub const SENTINEL_IDENTIFIER: i64 = 0;

/// Timestamp format for attendance records (local time, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date-prefix format for day-scoped aggregates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Group filter value meaning "no filtering".
pub const FILTER_ALL: &str = "ALL";

/// Number of recent check-ins shown on the dashboard.
pub const RECENT_CHECKINS_LIMIT: usize = 8;
