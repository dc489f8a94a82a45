use crate::errors::TallyResult;
use crate::models::{AttendanceRecord, GroupTag, RecordFilter, RosterEntry};

/// Durable identifier → (name, group) mapping plus the group-tag set.
///
/// Implementations normalize names (trim, collapse internal whitespace)
/// before every comparison and store, and enforce global case-insensitive
/// name uniqueness. All mutating and compound-read operations are
/// linearized by the implementation's critical section.
pub trait IRosterStore: Send + Sync {
    /// Insert or fully replace the entry at `identifier`. Fails with
    /// `DuplicateName` when the name already belongs to a different
    /// identifier; the store is left unchanged in that case.
    fn upsert(&self, identifier: i64, name: &str, group: &str) -> TallyResult<()>;

    /// As `upsert`, but fails with `NotFound` when no entry exists at
    /// `identifier`. The duplicate check excludes the entry itself.
    fn update(&self, identifier: i64, name: &str, group: &str) -> TallyResult<()>;

    /// Remove the entry if present; no-op when absent.
    fn delete(&self, identifier: i64) -> TallyResult<()>;

    fn get(&self, identifier: i64) -> TallyResult<Option<RosterEntry>>;

    /// Every entry, ordered by (group, identifier).
    fn list_all(&self) -> TallyResult<Vec<RosterEntry>>;

    fn count_entries(&self) -> TallyResult<usize>;

    /// Registered entries per group.
    fn entry_counts_by_group(&self) -> TallyResult<Vec<(String, usize)>>;

    /// Delete every entry. Idempotent.
    fn reset_all(&self) -> TallyResult<()>;

    // --- Group tags ---

    /// Group tags ordered by name.
    fn list_groups(&self) -> TallyResult<Vec<GroupTag>>;

    /// Add a group tag. Idempotent; rejects an empty name.
    fn add_group(&self, name: &str) -> TallyResult<()>;

    /// Delete a group tag. Fails with `GroupInUse` while any roster
    /// entry references it.
    fn delete_group(&self, name: &str) -> TallyResult<()>;
}

/// Durable append-only attendance log. Records are immutable once
/// written; the only destructive operation is the bulk reset.
pub trait IAttendanceLog: Send + Sync {
    /// Append one record. Always succeeds; multiple records per
    /// identifier per day are expected (gated upstream by the cooldown).
    fn append(&self, identifier: i64, name: &str, group: &str, timestamp: &str)
        -> TallyResult<()>;

    /// Records matching `filter`, ordered by timestamp descending
    /// (arrival order descending within one second).
    fn query(&self, filter: &RecordFilter) -> TallyResult<Vec<AttendanceRecord>>;

    /// The most recent `limit` records.
    fn recent(&self, limit: usize) -> TallyResult<Vec<AttendanceRecord>>;

    fn count(&self, filter: &RecordFilter) -> TallyResult<usize>;

    /// Check-in totals per group, optionally restricted to one day.
    fn record_counts_by_group(&self, date_prefix: Option<&str>)
        -> TallyResult<Vec<(String, usize)>>;

    /// Distinct identifiers with at least one record on the given day.
    fn identifiers_seen_on(&self, date_prefix: &str) -> TallyResult<Vec<i64>>;

    /// Delete every record. Idempotent.
    fn reset_all(&self) -> TallyResult<()>;
}
