use serde::{Deserialize, Serialize};

use super::attendance_record::AttendanceRecord;
use super::roster_entry::RosterEntry;

/// Aggregate counts and recent check-ins for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub registered: usize,
    pub checkins_today: usize,
    pub checkins_total: usize,
    pub cooldown_secs: u64,
    pub recent: Vec<AttendanceRecord>,
}

/// Per-group registered/today/total counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub group: String,
    pub registered: usize,
    pub checkins_today: usize,
    pub checkins_total: usize,
}

/// A roster entry plus whether it has checked in today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterStatus {
    pub entry: RosterEntry,
    pub checked_in_today: bool,
}

/// Per-group and per-entry breakdown for a single day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// The `YYYY-MM-DD` day the report covers.
    pub date: String,
    pub groups: Vec<GroupSummary>,
    pub entries: Vec<RosterStatus>,
}
