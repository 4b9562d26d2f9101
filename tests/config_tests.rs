mod common;

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn config_init_creates_default_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    common::aegisops_cmd()
        .arg("config")
        .arg("init")
        .arg("--path")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at:"));

    assert!(config_path.exists());
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[output]"));
    assert!(content.contains("[thresholds]"));
    assert!(content.contains("[audit]"));
}

#[test]
fn config_init_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nested").join("dir").join("config.toml");

    common::aegisops_cmd()
        .arg("config")
        .arg("init")
        .arg("--path")
        .arg(&config_path)
        .assert()
        .success();

    assert!(config_path.exists());
}

#[test]
fn config_file_sets_default_output_format() {
    let (_dir, config_path) = common::write_config(
        r#"
        [output]
        format = "json"
        "#,
    );

    common::aegisops_with_config(&config_path)
        .arg("threats")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"threats\""))
        .stdout(predicate::str::contains("\"severityFilter\""));
}

#[test]
fn explicit_format_flag_overrides_config() {
    let (_dir, config_path) = common::write_config(
        r#"
        [output]
        format = "json"
        "#,
    );

    common::aegisops_with_config(&config_path)
        .arg("threats")
        .arg("--format")
        .arg("text")
        .assert()
        .success()
        .stdout(predicate::str::contains("THREAT INTELLIGENCE"));
}

#[test]
fn malformed_config_fails_with_error() {
    let (_dir, config_path) = common::write_config("not [ valid toml {{");

    common::aegisops_with_config(&config_path)
        .arg("threats")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
}
