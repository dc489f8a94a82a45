//! StorageEngine — owns the ConnectionPool, implements IRosterStore +
//! IAttendanceLog + IDetectionSink, runs migrations and group seeding
//! at startup.

use std::path::Path;

use tally_core::errors::TallyResult;
use tally_core::models::{AttendanceRecord, GroupTag, RecordFilter, RosterEntry};
use tally_core::traits::{IAttendanceLog, IDetectionSink, IRosterStore};

use crate::migrations;
use crate::pool::{ConnectionPool, ReadPool};
use crate::queries::{group_ops, record_ops, roster_ops};

/// The main storage engine. Owns the connection pool and provides the
/// full roster + attendance log + detection sink interface. The writer
/// mutex inside the pool is the process-wide critical section required
/// by the concurrency contract: every mutation and every compound read
/// goes through it.
pub struct StorageEngine {
    pool: ConnectionPool,
    /// When true, single-row reads use the read pool (file-backed mode).
    /// When false, all reads route through the writer (in-memory mode,
    /// because in-memory read pool connections are isolated databases).
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> TallyResult<Self> {
        let pool = ConnectionPool::open(path, ReadPool::default_size())?;
        let engine = Self {
            pool,
            use_read_pool: true,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> TallyResult<Self> {
        let pool = ConnectionPool::open_in_memory(1)?;
        let engine = Self {
            pool,
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Run migrations and seed the default group set.
    fn initialize(&self) -> TallyResult<()> {
        self.pool.writer.with_conn(|conn| {
            migrations::run_migrations(conn)?;
            group_ops::seed_default_groups(conn)?;
            Ok(())
        })
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Execute a single-statement read on the best available connection.
    fn with_reader<F, T>(&self, f: F) -> TallyResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> TallyResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn(f)
        }
    }
}

impl IRosterStore for StorageEngine {
    fn upsert(&self, identifier: i64, name: &str, group: &str) -> TallyResult<()> {
        // Duplicate check and insert are one critical section.
        self.pool
            .writer
            .with_conn(|conn| roster_ops::upsert_entry(conn, identifier, name, group))
    }

    fn update(&self, identifier: i64, name: &str, group: &str) -> TallyResult<()> {
        self.pool
            .writer
            .with_conn(|conn| roster_ops::update_entry(conn, identifier, name, group))
    }

    fn delete(&self, identifier: i64) -> TallyResult<()> {
        self.pool
            .writer
            .with_conn(|conn| roster_ops::delete_entry(conn, identifier))
    }

    fn get(&self, identifier: i64) -> TallyResult<Option<RosterEntry>> {
        self.with_reader(|conn| roster_ops::get_entry(conn, identifier))
    }

    fn list_all(&self) -> TallyResult<Vec<RosterEntry>> {
        self.with_reader(roster_ops::list_entries)
    }

    fn count_entries(&self) -> TallyResult<usize> {
        self.with_reader(roster_ops::count_entries)
    }

    fn entry_counts_by_group(&self) -> TallyResult<Vec<(String, usize)>> {
        self.with_reader(roster_ops::entry_counts_by_group)
    }

    fn reset_all(&self) -> TallyResult<()> {
        self.pool.writer.with_conn(roster_ops::reset_entries)
    }

    fn list_groups(&self) -> TallyResult<Vec<GroupTag>> {
        self.with_reader(group_ops::list_groups)
    }

    fn add_group(&self, name: &str) -> TallyResult<()> {
        self.pool.writer.with_conn(|conn| group_ops::add_group(conn, name))
    }

    fn delete_group(&self, name: &str) -> TallyResult<()> {
        // Reference count and delete are one critical section.
        self.pool
            .writer
            .with_conn(|conn| group_ops::delete_group(conn, name))
    }
}

impl IAttendanceLog for StorageEngine {
    fn append(&self, identifier: i64, name: &str, group: &str, timestamp: &str) -> TallyResult<()> {
        self.pool.writer.with_conn(|conn| {
            record_ops::insert_record(conn, identifier, name, group, timestamp)?;
            Ok(())
        })
    }

    fn query(&self, filter: &RecordFilter) -> TallyResult<Vec<AttendanceRecord>> {
        self.with_reader(|conn| record_ops::query_records(conn, filter))
    }

    fn recent(&self, limit: usize) -> TallyResult<Vec<AttendanceRecord>> {
        self.with_reader(|conn| record_ops::recent_records(conn, limit))
    }

    fn count(&self, filter: &RecordFilter) -> TallyResult<usize> {
        self.with_reader(|conn| record_ops::count_records(conn, filter))
    }

    fn record_counts_by_group(
        &self,
        date_prefix: Option<&str>,
    ) -> TallyResult<Vec<(String, usize)>> {
        self.with_reader(|conn| record_ops::record_counts_by_group(conn, date_prefix))
    }

    fn identifiers_seen_on(&self, date_prefix: &str) -> TallyResult<Vec<i64>> {
        self.with_reader(|conn| record_ops::identifiers_seen_on(conn, date_prefix))
    }

    fn reset_all(&self) -> TallyResult<()> {
        self.pool.writer.with_conn(record_ops::reset_records)
    }
}

impl IDetectionSink for StorageEngine {
    fn record_detection(
        &self,
        identifier: i64,
        timestamp: &str,
    ) -> TallyResult<Option<AttendanceRecord>> {
        // Resolve and append atomically so a concurrent roster edit
        // cannot interleave between lookup and commit.
        self.pool.writer.with_conn(|conn| {
            let Some(entry) = roster_ops::get_entry(conn, identifier)? else {
                return Ok(None);
            };
            let record =
                record_ops::insert_record(conn, identifier, &entry.name, &entry.group, timestamp)?;
            Ok(Some(record))
        })
    }
}
