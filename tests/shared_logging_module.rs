use menunav::shared::logging::{append_nav_log, nav_log_line, EventLevel, EventLog, NavEvent};
use std::fs;
use tempfile::tempdir;

#[test]
fn nav_log_writes_json_lines() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("logs/menunav.log");

    append_nav_log(&path, &NavEvent::info("menu.test", "hello menu"));
    append_nav_log(&path, &NavEvent::warn("route.test", "second"));

    let log = fs::read_to_string(&path).expect("read log");
    assert_eq!(log.lines().count(), 2);
    assert!(log.contains("\"level\":\"info\""));
    assert!(log.contains("\"event\":\"menu.test\""));
    assert!(log.contains("\"message\":\"hello menu\""));
    assert!(log.contains("\"level\":\"warn\""));
}

#[test]
fn log_line_carries_timestamp() {
    let line = nav_log_line(&NavEvent::new(EventLevel::Error, "x.y", "boom")).expect("line");
    let value: serde_json::Value = serde_json::from_str(&line).expect("json");
    assert!(value["timestamp"].as_i64().is_some());
    assert_eq!(value["level"], "error");
}

#[test]
fn disabled_event_log_writes_nothing() {
    let log = EventLog::disabled();
    assert!(log.path().is_none());
    log.record(&NavEvent::info("menu.test", "dropped"));

    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("events.log");
    let log = EventLog::to_file(&path);
    log.record_all(&[
        NavEvent::info("a", "1"),
        NavEvent::info("b", "2"),
    ]);
    let written = fs::read_to_string(&path).expect("read log");
    assert_eq!(written.lines().count(), 2);
}
