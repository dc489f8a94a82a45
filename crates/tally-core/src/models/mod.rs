//! Shared data models.

pub mod attendance_record;
pub mod dashboard;
pub mod group_tag;
pub mod record_filter;
pub mod roster_entry;

pub use attendance_record::AttendanceRecord;
pub use dashboard::{AnalyticsReport, DashboardSnapshot, GroupSummary, RosterStatus};
pub use group_tag::GroupTag;
pub use record_filter::RecordFilter;
pub use roster_entry::{normalize_name, RosterEntry};
