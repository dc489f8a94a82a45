//! Integration test: dashboard and analytics aggregates over live data.

use std::sync::Arc;

use chrono::Local;

use tally_core::constants::TIMESTAMP_FORMAT;
use tally_core::traits::IAttendanceLog;
use tally_service::AttendanceService;
use tally_storage::StorageEngine;

fn now_stamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

fn setup() -> (Arc<StorageEngine>, AttendanceService<StorageEngine>) {
    let engine = Arc::new(StorageEngine::open_in_memory().unwrap());
    let service = AttendanceService::new(Arc::clone(&engine), 60);
    service.register(1, "Ryan", "Class A").unwrap();
    service.register(2, "Mei", "Class A").unwrap();
    service.register(3, "Ken", "Class B").unwrap();
    (engine, service)
}

#[test]
fn dashboard_reflects_live_counts() {
    let (engine, service) = setup();
    engine.append(1, "Ryan", "Class A", &now_stamp()).unwrap();
    engine
        .append(1, "Ryan", "Class A", "2020-01-01 08:00:00")
        .unwrap();

    let snapshot = service.dashboard().unwrap();
    assert_eq!(snapshot.registered, 3);
    assert_eq!(snapshot.checkins_today, 1);
    assert_eq!(snapshot.checkins_total, 2);
    assert_eq!(snapshot.recent.len(), 2);
    // Newest first: today's check-in before the 2020 one.
    assert!(snapshot.recent[0].timestamp > snapshot.recent[1].timestamp);
}

#[test]
fn analytics_breaks_down_by_group_and_entry() {
    let (engine, service) = setup();
    engine.append(1, "Ryan", "Class A", &now_stamp()).unwrap();
    engine
        .append(3, "Ken", "Class B", "2020-01-01 08:00:00")
        .unwrap();

    let report = service.analytics().unwrap();

    let class_a = report.groups.iter().find(|g| g.group == "Class A").unwrap();
    assert_eq!(class_a.registered, 2);
    assert_eq!(class_a.checkins_today, 1);
    assert_eq!(class_a.checkins_total, 1);

    let class_b = report.groups.iter().find(|g| g.group == "Class B").unwrap();
    assert_eq!(class_b.registered, 1);
    assert_eq!(class_b.checkins_today, 0);
    assert_eq!(class_b.checkins_total, 1);

    let ryan = report
        .entries
        .iter()
        .find(|s| s.entry.identifier == 1)
        .unwrap();
    assert!(ryan.checked_in_today);
    let ken = report
        .entries
        .iter()
        .find(|s| s.entry.identifier == 3)
        .unwrap();
    assert!(!ken.checked_in_today);
}

#[test]
fn analytics_covers_groups_with_no_activity() {
    let (_engine, service) = setup();
    let report = service.analytics().unwrap();
    assert_eq!(report.groups.len(), 2);
    assert!(report
        .groups
        .iter()
        .all(|g| g.checkins_today == 0 && g.checkins_total == 0));
}
