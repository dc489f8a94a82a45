//! Group tag operations: list, add, guarded delete, default seeding.

use rusqlite::{params, Connection};

use tally_core::errors::{RosterError, TallyResult};
use tally_core::models::group_tag::DEFAULT_GROUPS;
use tally_core::models::GroupTag;

use crate::to_storage_err;

/// Group tags ordered by name.
pub fn list_groups(conn: &Connection) -> TallyResult<Vec<GroupTag>> {
    let mut stmt = conn
        .prepare("SELECT name FROM group_tags ORDER BY name")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| Ok(GroupTag { name: row.get(0)? }))
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Add a group tag. Idempotent.
pub fn add_group(conn: &Connection, name: &str) -> TallyResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RosterError::EmptyField { field: "group" }.into());
    }
    conn.execute(
        "INSERT OR IGNORE INTO group_tags (name) VALUES (?1)",
        params![name],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Delete a group tag. Blocked while any roster entry references it.
pub fn delete_group(conn: &Connection, name: &str) -> TallyResult<()> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM roster WHERE grp = ?1",
            params![name],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if count > 0 {
        return Err(RosterError::GroupInUse {
            group: name.to_string(),
            count: count as usize,
        }
        .into());
    }
    conn.execute("DELETE FROM group_tags WHERE name = ?1", params![name])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Insert the default group set when the table is empty. Runs once at
/// engine initialization.
pub fn seed_default_groups(conn: &Connection) -> TallyResult<()> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM group_tags", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    if count > 0 {
        return Ok(());
    }
    for group in DEFAULT_GROUPS {
        conn.execute(
            "INSERT OR IGNORE INTO group_tags (name) VALUES (?1)",
            params![group],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(())
}
