//! Upsert, update, get, list, delete, reset for roster entries.

use rusqlite::{params, Connection, OptionalExtension};

use tally_core::errors::{RosterError, TallyResult};
use tally_core::models::{normalize_name, RosterEntry};

use crate::to_storage_err;

/// Validate and normalize the (name, group) pair shared by upsert and
/// update.
fn prepare(name: &str, group: &str) -> Result<(String, String), RosterError> {
    let name = normalize_name(name);
    if name.is_empty() {
        return Err(RosterError::EmptyField { field: "name" });
    }
    let group = group.trim().to_string();
    if group.is_empty() {
        return Err(RosterError::EmptyField { field: "group" });
    }
    Ok((name, group))
}

/// Find the identifier currently holding a name, compared
/// case-insensitively on normalized names. The comparison runs in Rust
/// rather than relying on storage collation; the roster is small.
fn identifier_holding_name(conn: &Connection, name: &str) -> TallyResult<Option<i64>> {
    let key = name.to_lowercase();
    let mut stmt = conn
        .prepare("SELECT id, name FROM roster")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))
        .map_err(|e| to_storage_err(e.to_string()))?;
    for row in rows {
        let (id, existing) = row.map_err(|e| to_storage_err(e.to_string()))?;
        if existing.to_lowercase() == key {
            return Ok(Some(id));
        }
    }
    Ok(None)
}

/// Insert or fully replace the entry at `identifier`. Leaves the store
/// unchanged when the name belongs to a different identifier.
pub fn upsert_entry(conn: &Connection, identifier: i64, name: &str, group: &str) -> TallyResult<()> {
    let (name, group) = prepare(name, group)?;
    if let Some(holder) = identifier_holding_name(conn, &name)? {
        if holder != identifier {
            return Err(RosterError::DuplicateName { name }.into());
        }
    }
    conn.execute(
        "INSERT OR REPLACE INTO roster (id, name, grp) VALUES (?1, ?2, ?3)",
        params![identifier, name, group],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// As `upsert_entry`, but the identifier must already exist.
pub fn update_entry(conn: &Connection, identifier: i64, name: &str, group: &str) -> TallyResult<()> {
    let (name, group) = prepare(name, group)?;
    if get_entry(conn, identifier)?.is_none() {
        return Err(RosterError::NotFound { identifier }.into());
    }
    if let Some(holder) = identifier_holding_name(conn, &name)? {
        if holder != identifier {
            return Err(RosterError::DuplicateName { name }.into());
        }
    }
    conn.execute(
        "UPDATE roster SET name = ?2, grp = ?3 WHERE id = ?1",
        params![identifier, name, group],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_entry(conn: &Connection, identifier: i64) -> TallyResult<Option<RosterEntry>> {
    conn.query_row(
        "SELECT id, name, grp FROM roster WHERE id = ?1",
        params![identifier],
        |row| {
            Ok(RosterEntry {
                identifier: row.get(0)?,
                name: row.get(1)?,
                group: row.get(2)?,
            })
        },
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn delete_entry(conn: &Connection, identifier: i64) -> TallyResult<()> {
    conn.execute("DELETE FROM roster WHERE id = ?1", params![identifier])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Every entry, ordered by (group, identifier).
pub fn list_entries(conn: &Connection) -> TallyResult<Vec<RosterEntry>> {
    let mut stmt = conn
        .prepare("SELECT id, name, grp FROM roster ORDER BY grp, id")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            Ok(RosterEntry {
                identifier: row.get(0)?,
                name: row.get(1)?,
                group: row.get(2)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn count_entries(conn: &Connection) -> TallyResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM roster", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

/// Registered entries per group, ordered by group.
pub fn entry_counts_by_group(conn: &Connection) -> TallyResult<Vec<(String, usize)>> {
    let mut stmt = conn
        .prepare("SELECT grp, COUNT(*) FROM roster GROUP BY grp ORDER BY grp")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as usize))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn reset_entries(conn: &Connection) -> TallyResult<()> {
    conn.execute("DELETE FROM roster", [])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
