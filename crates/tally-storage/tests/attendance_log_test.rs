//! Integration test: append-only log, filtering, ordering, aggregates.

use tally_core::models::RecordFilter;
use tally_core::traits::IAttendanceLog;
use tally_storage::StorageEngine;

fn seeded_engine() -> StorageEngine {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .append(1, "Ryan", "Class A", "2026-08-28 09:00:00")
        .unwrap();
    engine
        .append(2, "Mei", "Class B", "2026-08-29 08:30:00")
        .unwrap();
    engine
        .append(1, "Ryan", "Class A", "2026-08-29 09:15:00")
        .unwrap();
    engine
}

#[test]
fn query_returns_newest_first() {
    let engine = seeded_engine();
    let records = engine.query(&RecordFilter::all()).unwrap();
    let times: Vec<&str> = records.iter().map(|r| r.timestamp.as_str()).collect();
    assert_eq!(
        times,
        vec![
            "2026-08-29 09:15:00",
            "2026-08-29 08:30:00",
            "2026-08-28 09:00:00",
        ]
    );
}

#[test]
fn same_second_appends_keep_arrival_order() {
    let engine = StorageEngine::open_in_memory().unwrap();
    for name in ["first", "second", "third"] {
        engine
            .append(1, name, "Class A", "2026-08-29 09:00:00")
            .unwrap();
    }
    let records = engine.query(&RecordFilter::all()).unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    // Newest first means reverse arrival order.
    assert_eq!(names, vec!["third", "second", "first"]);
}

#[test]
fn group_filter_matches_stored_group_only() {
    let engine = seeded_engine();
    let records = engine
        .query(&RecordFilter::by_group(Some("Class A")))
        .unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.group == "Class A"));
}

#[test]
fn all_filter_means_no_filtering() {
    let engine = seeded_engine();
    let all = engine.query(&RecordFilter::by_group(Some("ALL"))).unwrap();
    assert_eq!(all.len(), 3);
}

#[test]
fn duplicate_records_per_identifier_are_allowed() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .append(1, "Ryan", "Class A", "2026-08-29 09:00:00")
        .unwrap();
    engine
        .append(1, "Ryan", "Class A", "2026-08-29 09:02:00")
        .unwrap();
    assert_eq!(engine.count(&RecordFilter::all()).unwrap(), 2);
}

#[test]
fn count_by_date_prefix() {
    let engine = seeded_engine();
    let today = RecordFilter::all().on_day("2026-08-29");
    assert_eq!(engine.count(&today).unwrap(), 2);

    let combined = RecordFilter::by_group(Some("Class A")).on_day("2026-08-29");
    assert_eq!(engine.count(&combined).unwrap(), 1);
}

#[test]
fn counts_by_group_with_and_without_day() {
    let engine = seeded_engine();
    assert_eq!(
        engine.record_counts_by_group(None).unwrap(),
        vec![("Class A".to_string(), 2), ("Class B".to_string(), 1)]
    );
    assert_eq!(
        engine.record_counts_by_group(Some("2026-08-29")).unwrap(),
        vec![("Class A".to_string(), 1), ("Class B".to_string(), 1)]
    );
}

#[test]
fn identifiers_seen_on_a_day_are_distinct() {
    let engine = seeded_engine();
    engine
        .append(2, "Mei", "Class B", "2026-08-29 10:00:00")
        .unwrap();
    assert_eq!(
        engine.identifiers_seen_on("2026-08-29").unwrap(),
        vec![1, 2]
    );
    assert_eq!(engine.identifiers_seen_on("2026-08-28").unwrap(), vec![1]);
}

#[test]
fn recent_is_bounded_and_newest_first() {
    let engine = seeded_engine();
    let recent = engine.recent(2).unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].timestamp, "2026-08-29 09:15:00");
}

#[test]
fn reset_empties_the_log_and_is_idempotent() {
    let engine = seeded_engine();
    IAttendanceLog::reset_all(&engine).unwrap();
    assert_eq!(engine.count(&RecordFilter::all()).unwrap(), 0);
    IAttendanceLog::reset_all(&engine).unwrap();
    assert_eq!(engine.count(&RecordFilter::all()).unwrap(), 0);
}
