//! Ordered schema migrations, tracked via `PRAGMA user_version`.

pub mod v001_attendance_tables;

use rusqlite::Connection;

use tally_core::errors::{StorageError, TallyResult};
use tally_core::TallyError;

use crate::to_storage_err;

type Migration = fn(&Connection) -> TallyResult<()>;

const MIGRATIONS: &[(u32, Migration)] = &[(1, v001_attendance_tables::migrate)];

/// Run every migration newer than the database's current version.
pub fn run_migrations(conn: &Connection) -> TallyResult<()> {
    let current: i64 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    for (version, migrate) in MIGRATIONS {
        if i64::from(*version) <= current {
            continue;
        }
        migrate(conn).map_err(|e| {
            TallyError::Storage(StorageError::MigrationFailed {
                version: *version,
                reason: e.to_string(),
            })
        })?;
        conn.pragma_update(None, "user_version", version)
            .map_err(|e| to_storage_err(e.to_string()))?;
        tracing::debug!(version, "applied migration");
    }
    Ok(())
}

/// Current schema version of the database.
pub fn schema_version(conn: &Connection) -> TallyResult<i64> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}
