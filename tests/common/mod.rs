//! Shared test utilities for AegisOps integration tests.
//!
//! Provides a preconfigured binary command plus a tiny config-file helper so
//! each suite does not repeat tempdir and flag plumbing.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Returns a `Command` configured to run the `aegisops` binary with color
/// forced off so output assertions see plain text.
#[allow(dead_code, deprecated)]
pub fn aegisops_cmd() -> Command {
    let mut cmd = Command::cargo_bin("aegisops").unwrap();
    cmd.arg("--color").arg("never");
    cmd
}

/// Writes a config file into a fresh tempdir and returns (dir, path).
/// The tempdir must stay alive for the duration of the test.
#[allow(dead_code)]
pub fn write_config(toml: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, toml).unwrap();
    (dir, path)
}

/// Returns an `aegisops` command pointed at the given config file.
#[allow(dead_code)]
pub fn aegisops_with_config(config_path: &Path) -> Command {
    let mut cmd = aegisops_cmd();
    cmd.arg("--config").arg(config_path);
    cmd
}
