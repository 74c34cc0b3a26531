use menunav::source::{FileMenuSource, MenuSource, MenuSourceError, StaticMenuSource};
use std::fs;
use tempfile::tempdir;

#[test]
fn file_source_reads_yaml_records() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("menus.yaml");
    fs::write(
        &path,
        r#"
- id: 1
  pid: 0
  title: 系统管理
  path: /system
- id: 2
  pid: 1
  title: 用户管理
  path: /system/users
  component_path: system/Users
  sort_num: 1
"#,
    )
    .expect("write menus");

    let source = FileMenuSource::new(&path);
    let records = source.fetch_menu_records().expect("fetch");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].component_ref(), Some("system/Users"));
    assert!(source.describe().contains("menus.yaml"));
}

#[test]
fn file_source_accepts_wrapped_json_list() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("menus.json");
    fs::write(
        &path,
        r#"{"list": [{"id": 1, "parentId": null, "title": "a", "path": "/a", "status": 10}]}"#,
    )
    .expect("write menus");

    let records = FileMenuSource::new(&path)
        .fetch_menu_records()
        .expect("fetch");
    assert_eq!(records[0].parent_id, 0);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempdir().expect("tempdir");
    let err = FileMenuSource::new(dir.path().join("absent.yaml"))
        .fetch_menu_records()
        .expect_err("missing file");
    assert!(matches!(err, MenuSourceError::Read { .. }));
}

#[test]
fn malformed_file_is_a_decode_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("menus.yaml");
    fs::write(&path, "just: [a, string").expect("write menus");
    let err = FileMenuSource::new(&path)
        .fetch_menu_records()
        .expect_err("malformed");
    assert!(matches!(err, MenuSourceError::Decode { .. }));
}

#[test]
fn static_sources_serve_built_in_menus() {
    assert_eq!(StaticMenuSource::demo().fetch_menu_records().expect("demo").len(), 16);
    assert_eq!(
        StaticMenuSource::default_menu()
            .fetch_menu_records()
            .expect("default")
            .len(),
        4
    );
}
