//! The administration façade: thin translation from external requests
//! into roster store / attendance log calls.

use std::sync::Arc;

use chrono::Local;

use tally_core::constants::{DATE_FORMAT, RECENT_CHECKINS_LIMIT};
use tally_core::errors::{RosterError, TallyResult};
use tally_core::models::{
    AnalyticsReport, AttendanceRecord, DashboardSnapshot, GroupSummary, GroupTag, RecordFilter,
    RosterEntry, RosterStatus,
};
use tally_core::traits::{IAttendanceLog, IRosterStore};

use crate::export;

/// Holds no state of its own; everything lives in the shared store.
pub struct AttendanceService<S> {
    store: Arc<S>,
    cooldown_secs: u64,
}

impl<S: IRosterStore + IAttendanceLog> AttendanceService<S> {
    pub fn new(store: Arc<S>, cooldown_secs: u64) -> Self {
        Self {
            store,
            cooldown_secs,
        }
    }

    fn today() -> String {
        Local::now().format(DATE_FORMAT).to_string()
    }

    // --- Reads ---

    /// Aggregate counts plus the most recent check-ins.
    pub fn dashboard(&self) -> TallyResult<DashboardSnapshot> {
        let today = RecordFilter::all().on_day(Self::today());
        Ok(DashboardSnapshot {
            registered: self.store.count_entries()?,
            checkins_today: self.store.count(&today)?,
            checkins_total: self.store.count(&RecordFilter::all())?,
            cooldown_secs: self.cooldown_secs,
            recent: self.store.recent(RECENT_CHECKINS_LIMIT)?,
        })
    }

    /// Attendance records, optionally filtered by group, newest first.
    pub fn records(&self, group: Option<&str>) -> TallyResult<Vec<AttendanceRecord>> {
        self.store.query(&RecordFilter::by_group(group))
    }

    /// Every roster entry, ordered by (group, identifier).
    pub fn roster(&self) -> TallyResult<Vec<RosterEntry>> {
        self.store.list_all()
    }

    pub fn entry(&self, identifier: i64) -> TallyResult<Option<RosterEntry>> {
        self.store.get(identifier)
    }

    pub fn groups(&self) -> TallyResult<Vec<GroupTag>> {
        self.store.list_groups()
    }

    /// Per-group and per-entry breakdown for today.
    pub fn analytics(&self) -> TallyResult<AnalyticsReport> {
        let date = Self::today();
        let registered = self.store.entry_counts_by_group()?;
        let today_counts = self.store.record_counts_by_group(Some(&date))?;
        let total_counts = self.store.record_counts_by_group(None)?;

        let lookup = |counts: &[(String, usize)], group: &str| {
            counts
                .iter()
                .find(|(g, _)| g == group)
                .map(|(_, n)| *n)
                .unwrap_or(0)
        };

        let groups = self
            .store
            .list_groups()?
            .into_iter()
            .map(|tag| GroupSummary {
                registered: lookup(&registered, &tag.name),
                checkins_today: lookup(&today_counts, &tag.name),
                checkins_total: lookup(&total_counts, &tag.name),
                group: tag.name,
            })
            .collect();

        let seen_today: std::collections::HashSet<i64> =
            self.store.identifiers_seen_on(&date)?.into_iter().collect();
        let entries = self
            .store
            .list_all()?
            .into_iter()
            .map(|entry| RosterStatus {
                checked_in_today: seen_today.contains(&entry.identifier),
                entry,
            })
            .collect();

        Ok(AnalyticsReport {
            date,
            groups,
            entries,
        })
    }

    /// Tabular snapshot of the filtered records for download.
    pub fn export_csv(&self, group: Option<&str>) -> TallyResult<String> {
        let records = self.records(group)?;
        Ok(export::records_csv(&records))
    }

    // --- Mutations ---

    /// Register (insert or replace) a roster entry.
    pub fn register(&self, identifier: i64, name: &str, group: &str) -> TallyResult<()> {
        if identifier < 0 {
            return Err(RosterError::InvalidIdentifier { identifier }.into());
        }
        self.store.upsert(identifier, name, group)?;
        tracing::info!(identifier, name, group, "roster entry registered");
        Ok(())
    }

    /// Edit an existing roster entry.
    pub fn edit(&self, identifier: i64, name: &str, group: &str) -> TallyResult<()> {
        self.store.update(identifier, name, group)?;
        tracing::info!(identifier, name, group, "roster entry updated");
        Ok(())
    }

    pub fn delete_entry(&self, identifier: i64) -> TallyResult<()> {
        self.store.delete(identifier)
    }

    pub fn add_group(&self, name: &str) -> TallyResult<()> {
        self.store.add_group(name)
    }

    pub fn delete_group(&self, name: &str) -> TallyResult<()> {
        self.store.delete_group(name)
    }

    /// Delete every roster entry.
    pub fn reset_roster(&self) -> TallyResult<()> {
        tracing::warn!("resetting all roster entries");
        IRosterStore::reset_all(&*self.store)
    }

    /// Delete every attendance record.
    pub fn reset_records(&self) -> TallyResult<()> {
        tracing::warn!("resetting all attendance records");
        IAttendanceLog::reset_all(&*self.store)
    }
}
