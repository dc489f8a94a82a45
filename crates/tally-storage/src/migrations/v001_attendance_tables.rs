//! v001: roster, group_tags, records.

use rusqlite::Connection;

use tally_core::errors::TallyResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TallyResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS group_tags (
            name        TEXT PRIMARY KEY
        );

        CREATE TABLE IF NOT EXISTS roster (
            id          INTEGER PRIMARY KEY,
            name        TEXT NOT NULL,
            grp         TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_roster_grp ON roster(grp);

        CREATE TABLE IF NOT EXISTS records (
            seq         INTEGER PRIMARY KEY AUTOINCREMENT,
            id          INTEGER NOT NULL,
            name        TEXT NOT NULL,
            grp         TEXT NOT NULL,
            time        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_records_grp ON records(grp);
        CREATE INDEX IF NOT EXISTS idx_records_time ON records(time);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
