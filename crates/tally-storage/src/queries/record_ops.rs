//! Append and query operations for the append-only attendance log.
//! No per-record update or delete exists; the only destructive
//! operation is the bulk reset.

use rusqlite::{params_from_iter, Connection};

use tally_core::errors::TallyResult;
use tally_core::models::{AttendanceRecord, RecordFilter};

use crate::to_storage_err;

/// Append one record and return it with its assigned sequence number.
pub fn insert_record(
    conn: &Connection,
    identifier: i64,
    name: &str,
    group: &str,
    timestamp: &str,
) -> TallyResult<AttendanceRecord> {
    conn.execute(
        "INSERT INTO records (id, name, grp, time) VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![identifier, name, group, timestamp],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(AttendanceRecord {
        seq: conn.last_insert_rowid(),
        identifier,
        name: name.to_string(),
        group: group.to_string(),
        timestamp: timestamp.to_string(),
    })
}

/// WHERE clause and parameters for a filter. Empty filter matches all;
/// every parameter is TEXT.
fn filter_clause(filter: &RecordFilter) -> (String, Vec<String>) {
    let mut conditions: Vec<&str> = Vec::new();
    let mut args: Vec<String> = Vec::new();
    if let Some(group) = &filter.group {
        conditions.push("grp = ?");
        args.push(group.clone());
    }
    if let Some(prefix) = &filter.date_prefix {
        conditions.push("time LIKE ?");
        args.push(format!("{prefix}%"));
    }
    let clause = if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    };
    (clause, args)
}

/// Records matching the filter, newest first. `seq DESC` tiebreak keeps
/// arrival order within one second.
pub fn query_records(conn: &Connection, filter: &RecordFilter) -> TallyResult<Vec<AttendanceRecord>> {
    let (clause, args) = filter_clause(filter);
    let sql = format!(
        "SELECT seq, id, name, grp, time FROM records{clause} ORDER BY time DESC, seq DESC"
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params_from_iter(args.iter()), |row| {
            Ok(AttendanceRecord {
                seq: row.get(0)?,
                identifier: row.get(1)?,
                name: row.get(2)?,
                group: row.get(3)?,
                timestamp: row.get(4)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// The most recent `limit` records.
pub fn recent_records(conn: &Connection, limit: usize) -> TallyResult<Vec<AttendanceRecord>> {
    let mut stmt = conn
        .prepare("SELECT seq, id, name, grp, time FROM records ORDER BY time DESC, seq DESC LIMIT ?1")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([limit as i64], |row| {
            Ok(AttendanceRecord {
                seq: row.get(0)?,
                identifier: row.get(1)?,
                name: row.get(2)?,
                group: row.get(3)?,
                timestamp: row.get(4)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn count_records(conn: &Connection, filter: &RecordFilter) -> TallyResult<usize> {
    let (clause, args) = filter_clause(filter);
    let sql = format!("SELECT COUNT(*) FROM records{clause}");
    let count: i64 = conn
        .query_row(&sql, params_from_iter(args.iter()), |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

/// Check-in totals per group, optionally restricted to one day.
pub fn record_counts_by_group(
    conn: &Connection,
    date_prefix: Option<&str>,
) -> TallyResult<Vec<(String, usize)>> {
    let filter = RecordFilter {
        group: None,
        date_prefix: date_prefix.map(str::to_string),
    };
    let (clause, args) = filter_clause(&filter);
    let sql = format!("SELECT grp, COUNT(*) FROM records{clause} GROUP BY grp ORDER BY grp");
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params_from_iter(args.iter()), |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as usize))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Distinct identifiers with at least one record on the given day.
pub fn identifiers_seen_on(conn: &Connection, date_prefix: &str) -> TallyResult<Vec<i64>> {
    let mut stmt = conn
        .prepare("SELECT DISTINCT id FROM records WHERE time LIKE ?1 ORDER BY id")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([format!("{date_prefix}%")], |row| row.get::<_, i64>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn reset_records(conn: &Connection) -> TallyResult<()> {
    conn.execute("DELETE FROM records", [])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
