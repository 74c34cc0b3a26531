use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn binary_runs_with_built_in_defaults_when_config_is_missing() {
    let dir = tempdir().expect("tempdir");

    let output = Command::new(env!("CARGO_BIN_EXE_menunav"))
        .arg("status")
        .env("HOME", dir.path())
        .env_remove("MENUNAV_CONFIG")
        .output()
        .expect("run binary");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("state=ready"));
    assert!(stdout.contains("records=16"));
    assert!(stdout.contains("service_combination=all_services"));
}

#[test]
fn binary_reads_config_from_environment_and_logs_events() {
    let dir = tempdir().expect("tempdir");
    let log_path = dir.path().join("menunav.log");
    let config_path = dir.path().join("custom.yaml");
    fs::write(
        &config_path,
        format!(
            "menu_source:\n  kind: file\n  path: {}\nlog_path: {}\n",
            dir.path().join("missing-menus.yaml").display(),
            log_path.display()
        ),
    )
    .expect("write config");

    let output = Command::new(env!("CARGO_BIN_EXE_menunav"))
        .arg("routes")
        .env("HOME", dir.path())
        .env("MENUNAV_CONFIG", &config_path)
        .output()
        .expect("run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("route_count=3"));

    let log = fs::read_to_string(&log_path).expect("read event log");
    assert!(log.contains("orchestrator.load_failed"));
}

#[test]
fn binary_exits_non_zero_on_unknown_command() {
    let dir = tempdir().expect("tempdir");
    let output = Command::new(env!("CARGO_BIN_EXE_menunav"))
        .arg("launch")
        .env("HOME", dir.path())
        .env_remove("MENUNAV_CONFIG")
        .output()
        .expect("run binary");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown command `launch`"));
}
