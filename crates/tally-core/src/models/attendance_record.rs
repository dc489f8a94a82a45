use serde::{Deserialize, Serialize};

/// One immutable check-in. Name and group are denormalized copies taken
/// at write time; later roster edits do not change historical records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Arrival-order sequence number assigned by the store.
    pub seq: i64,
    /// Sensor identifier that produced the check-in.
    pub identifier: i64,
    pub name: String,
    pub group: String,
    /// Local time, `%Y-%m-%d %H:%M:%S`.
    pub timestamp: String,
}

impl AttendanceRecord {
    /// The `YYYY-MM-DD` day this record belongs to.
    pub fn date_prefix(&self) -> &str {
        self.timestamp.get(..10).unwrap_or(&self.timestamp)
    }
}
