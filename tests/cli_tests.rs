mod common;

use predicates::prelude::*;

#[test]
fn cli_shows_help() {
    common::aegisops_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("AegisOps"))
        .stdout(predicate::str::contains("threats"))
        .stdout(predicate::str::contains("policies"));
}

#[test]
fn cli_shows_version() {
    common::aegisops_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_log_level_flag_accepted() {
    common::aegisops_cmd()
        .arg("--log-level")
        .arg("debug")
        .arg("threats")
        .assert()
        .success();
}

#[test]
fn cli_log_level_invalid_rejected() {
    common::aegisops_cmd()
        .arg("--log-level")
        .arg("verbose")
        .arg("threats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("possible values"));
}

#[test]
fn cli_debug_logging_shows_on_stderr_not_stdout() {
    let output = common::aegisops_cmd()
        .arg("--log-level")
        .arg("debug")
        .arg("threats")
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("THREAT INTELLIGENCE"),
        "stdout should contain the threat table, got: {}",
        stdout
    );
    assert!(
        !stdout.contains("DEBUG") && !stdout.contains("WARN"),
        "stdout should not contain tracing output, got: {}",
        stdout
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.is_empty(),
        "stderr should contain debug logging output, but was empty"
    );
}

#[test]
fn default_log_level_produces_no_stderr_noise() {
    let output = common::aegisops_cmd().arg("summary").output().unwrap();

    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.is_empty(),
        "At default warn level, stderr should be empty, but got: {}",
        stderr
    );
}

#[test]
fn cli_summary_shows_overview() {
    common::aegisops_cmd()
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("SECURITY OVERVIEW"))
        .stdout(predicate::str::contains("Total Interactions"))
        .stdout(predicate::str::contains("RECENT INCIDENTS"))
        .stdout(predicate::str::contains("CONNECTED ASSETS"));
}

#[test]
fn cli_summary_spin_reports_rotation() {
    common::aegisops_cmd()
        .arg("summary")
        .arg("--spin-ms")
        .arg("50")
        .assert()
        .success()
        .stdout(predicate::str::contains("globe rotation:"));
}

#[test]
fn cli_summary_json_includes_rotation() {
    common::aegisops_cmd()
        .arg("summary")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kpi\""))
        .stdout(predicate::str::contains("\"globeRotationRadians\""));
}
