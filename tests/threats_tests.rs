mod common;

use predicates::prelude::*;

#[test]
fn threats_unfiltered_shows_all_rows() {
    common::aegisops_cmd()
        .arg("threats")
        .assert()
        .success()
        .stdout(predicate::str::contains("10 of 10 threats shown"))
        .stdout(predicate::str::contains("THR-2026-0891"))
        .stdout(predicate::str::contains("THR-2026-0882"));
}

#[test]
fn threats_severity_filter_narrows_table() {
    common::aegisops_cmd()
        .arg("threats")
        .arg("--severity")
        .arg("critical")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 of 10 threats shown"))
        .stdout(predicate::str::contains("THR-2026-0891"))
        .stdout(predicate::str::contains("THR-2026-0886"))
        .stdout(predicate::str::contains("THR-2026-0890").not());
}

#[test]
fn threats_type_filter_narrows_table() {
    common::aegisops_cmd()
        .arg("threats")
        .arg("--type")
        .arg("jailbreak")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 of 10 threats shown"))
        .stdout(predicate::str::contains("THR-2026-0890"))
        .stdout(predicate::str::contains("THR-2026-0884"));
}

#[test]
fn threats_filters_combine_conjunctively() {
    // No fixture threat is both Critical and a jailbreak.
    common::aegisops_cmd()
        .arg("threats")
        .arg("--severity")
        .arg("critical")
        .arg("--type")
        .arg("jailbreak")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 of 10 threats shown"));
}

#[test]
fn threats_show_opens_detail_drawer() {
    common::aegisops_cmd()
        .arg("threats")
        .arg("--show")
        .arg("THR-2026-0889")
        .assert()
        .success()
        .stdout(predicate::str::contains("THREAT DETAIL - THR-2026-0889"))
        .stdout(predicate::str::contains("RAG Pipeline"))
        .stdout(predicate::str::contains("aegisops incident THR-2026-0889"));
}

#[test]
fn threats_drawer_survives_disjoint_filter() {
    // Selection is independent of the filters: a Critical-only view can
    // still show the drawer for a High threat.
    common::aegisops_cmd()
        .arg("threats")
        .arg("--severity")
        .arg("critical")
        .arg("--show")
        .arg("THR-2026-0890")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 of 10 threats shown"))
        .stdout(predicate::str::contains("THREAT DETAIL - THR-2026-0890"));
}

#[test]
fn threats_show_unknown_id_exits_not_found() {
    common::aegisops_cmd()
        .arg("threats")
        .arg("--show")
        .arg("THR-9999-0000")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn threats_json_carries_filters_and_selection() {
    common::aegisops_cmd()
        .arg("threats")
        .arg("--severity")
        .arg("high")
        .arg("--show")
        .arg("THR-2026-0890")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"severityFilter\": \"High\""))
        .stdout(predicate::str::contains("\"typeFilter\": null"))
        .stdout(predicate::str::contains("\"sourceIP\""))
        .stdout(predicate::str::contains("\"selected\""));
}
