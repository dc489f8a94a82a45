//! Integration test: data survives engine restart; records stay immutable.

use tally_core::models::RecordFilter;
use tally_core::traits::{IAttendanceLog, IRosterStore};
use tally_storage::StorageEngine;

#[test]
fn roster_and_records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("attendance.db");

    {
        let engine = StorageEngine::open(&path).unwrap();
        engine.upsert(1, "Ryan", "Class A").unwrap();
        engine
            .append(1, "Ryan", "Class A", "2026-08-29 09:00:00")
            .unwrap();
    }

    let engine = StorageEngine::open(&path).unwrap();
    assert_eq!(engine.get(1).unwrap().unwrap().name, "Ryan");
    let records = engine.query(&RecordFilter::all()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].timestamp, "2026-08-29 09:00:00");
}

#[test]
fn roster_edits_do_not_rewrite_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("attendance.db");
    let engine = StorageEngine::open(&path).unwrap();

    engine.upsert(1, "Ryan", "Class A").unwrap();
    engine
        .append(1, "Ryan", "Class A", "2026-08-29 09:00:00")
        .unwrap();

    // Denormalized name/group were captured at write time.
    engine.update(1, "Ryan Tan", "Class B").unwrap();
    let records = engine.query(&RecordFilter::all()).unwrap();
    assert_eq!(records[0].name, "Ryan");
    assert_eq!(records[0].group, "Class A");

    // Deleting the entry leaves the record behind too.
    engine.delete(1).unwrap();
    assert_eq!(engine.query(&RecordFilter::all()).unwrap().len(), 1);
}

#[test]
fn wal_mode_is_active_on_file_backed_engines() {
    let dir = tempfile::tempdir().unwrap();
    let engine = StorageEngine::open(&dir.path().join("wal.db")).unwrap();
    engine
        .pool()
        .writer
        .with_conn(|conn| {
            assert!(tally_storage::pool::pragmas::verify_wal_mode(conn).unwrap());
            Ok(())
        })
        .unwrap();
}
