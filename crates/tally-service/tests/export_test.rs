//! Integration test: CSV snapshot through the façade.

use std::sync::Arc;

use tally_core::traits::IAttendanceLog;
use tally_service::AttendanceService;
use tally_storage::StorageEngine;

fn setup() -> (Arc<StorageEngine>, AttendanceService<StorageEngine>) {
    let engine = Arc::new(StorageEngine::open_in_memory().unwrap());
    let service = AttendanceService::new(Arc::clone(&engine), 60);
    (engine, service)
}

#[test]
fn export_contains_header_and_rows_newest_first() {
    let (engine, service) = setup();
    engine
        .append(1, "Ryan", "Class A", "2026-08-29 09:00:00")
        .unwrap();
    engine
        .append(2, "Mei", "Class B", "2026-08-29 10:00:00")
        .unwrap();

    let csv = service.export_csv(None).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "ID,Name,Group,Timestamp");
    assert_eq!(lines[1], "2,Mei,Class B,2026-08-29 10:00:00");
    assert_eq!(lines[2], "1,Ryan,Class A,2026-08-29 09:00:00");
}

#[test]
fn export_respects_the_group_filter() {
    let (engine, service) = setup();
    engine
        .append(1, "Ryan", "Class A", "2026-08-29 09:00:00")
        .unwrap();
    engine
        .append(2, "Mei", "Class B", "2026-08-29 10:00:00")
        .unwrap();

    let csv = service.export_csv(Some("Class A")).unwrap();
    assert!(csv.contains("Ryan"));
    assert!(!csv.contains("Mei"));

    // "ALL" exports everything.
    let csv = service.export_csv(Some("ALL")).unwrap();
    assert!(csv.contains("Ryan") && csv.contains("Mei"));
}

#[test]
fn export_of_empty_log_is_header_only() {
    let (_engine, service) = setup();
    assert_eq!(service.export_csv(None).unwrap(), "ID,Name,Group,Timestamp\n");
}
