use menunav::app::cli::{parse_cli_verb, CliVerb};
use menunav::app::command_handlers::run_cli;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_config(dir: &Path, menus: &str) -> String {
    let menus_path = dir.join("menus.yaml");
    fs::write(&menus_path, menus).expect("write menus");
    let config_path = dir.join("config.yaml");
    fs::write(
        &config_path,
        format!(
            "menu_source:\n  kind: file\n  path: {}\nservice_discovery:\n  kind: static\n  available: [jobs]\n",
            menus_path.display()
        ),
    )
    .expect("write config");
    config_path.display().to_string()
}

const MENUS: &str = r#"
- {id: 1, pid: 0, title: 系统管理, path: /system}
- {id: 2, pid: 1, title: 用户管理, path: /system/users, component_path: system/Users}
- {id: 5, pid: 0, title: 职位管理, path: /jobs}
- {id: 6, pid: 5, title: 职位列表, path: /jobs/list}
- {id: 8, pid: 0, title: 简历管理, path: /resume}
- {id: 9, pid: 8, title: 简历库, path: /resume/library, component_path: resume/Library}
"#;

fn run(args: &[&str]) -> Result<String, String> {
    run_cli(args.iter().map(|s| s.to_string()).collect())
}

#[test]
fn verbs_parse() {
    assert_eq!(parse_cli_verb("tree"), CliVerb::Tree);
    assert_eq!(parse_cli_verb("breadcrumbs"), CliVerb::Breadcrumbs);
    assert_eq!(parse_cli_verb("launch"), CliVerb::Unknown);
}

#[test]
fn no_command_prints_help_and_unknown_command_fails() {
    let help = run(&[]).expect("help");
    assert!(help.contains("Usage: menunav"));
    let err = run(&["launch"]).expect_err("unknown");
    assert_eq!(err, "unknown command `launch`");
}

#[test]
fn routes_command_lists_routes_with_fallback_flag() {
    let dir = tempdir().expect("tempdir");
    let config = write_config(dir.path(), MENUS);
    let output = run(&["--config", &config, "routes"]).expect("routes");
    assert!(output.contains("route_count=3"));
    assert!(output.contains("fallback_count=1"));
    assert!(output.contains(
        "route name=system-users path=/system/users parent=Layout view=views/template/system/Users.vue"
    ));
    assert!(output.contains("path=/jobs/list parent=Layout view=views/template/Common.vue fallback=true"));
}

#[test]
fn tree_command_hides_unavailable_groups() {
    let dir = tempdir().expect("tempdir");
    let config = write_config(dir.path(), MENUS);
    let output = run(&["--config", &config, "tree"]).expect("tree");
    assert!(output.starts_with("state=ready"));
    assert!(output.contains("+ 职位管理 (/jobs) id=5"));
    assert!(output.contains("  - 职位列表 (/jobs/list) id=6"));
    assert!(!output.contains("/resume"));
}

#[test]
fn breadcrumbs_command_prints_trail() {
    let dir = tempdir().expect("tempdir");
    let config = write_config(dir.path(), MENUS);
    let output = run(&["--config", &config, "breadcrumbs", "/system/users"]).expect("crumbs");
    assert_eq!(output, "path=/system/users\nbreadcrumbs=系统管理 > 用户管理");

    let output = run(&["--config", &config, "breadcrumbs", "/nowhere"]).expect("crumbs");
    assert!(output.ends_with("breadcrumbs=none"));

    assert!(run(&["--config", &config, "breadcrumbs"]).is_err());
}

#[test]
fn services_and_status_report_key_values() {
    let dir = tempdir().expect("tempdir");
    let config = write_config(dir.path(), MENUS);
    let services = run(&["--config", &config, "services"]).expect("services");
    assert!(services.contains("combination=job_only"));
    assert!(services.contains("jobs=true"));
    assert!(services.contains("resume=false"));
    assert!(services.contains("tip=职位模式：职位管理功能已启用"));

    let status = run(&["--config", &config, "status"]).expect("status");
    assert!(status.contains("state=ready"));
    assert!(status.contains("records=6"));
    assert!(status.contains("routes=3"));
    assert!(status.contains("notice=none"));
}

#[test]
fn invalid_config_path_is_reported() {
    let dir = tempdir().expect("tempdir");
    let err = run(&[
        "--config",
        &dir.path().join("absent.yaml").display().to_string(),
        "status",
    ])
    .expect_err("missing config");
    assert!(err.contains("failed to read file"));
}
