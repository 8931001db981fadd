#![cfg(unix)]

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::tempdir;

fn write_config(root: &Path, command: &str) -> std::path::PathBuf {
    let cfg = root.join("config.toml");
    fs::write(
        &cfg,
        format!(
            "version = 1\n[profiles.default]\nblog_root = \"{}\"\n[profiles.default.deploy]\ncommand = {command}\n",
            root.display()
        ),
    )
    .unwrap();
    cfg
}

#[test]
fn deploy_reports_success() {
    let tmp = tempdir().unwrap();
    let cfg = write_config(tmp.path(), r#"["sh", "-c", "touch deployed"]"#);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pdk"));
    cmd.arg("--config").arg(&cfg).args(["deploy", "--yes"]);
    cmd.assert().success().stdout(predicate::str::contains("OK   pdk deploy"));

    assert!(tmp.path().join("deployed").exists());
}

#[test]
fn deploy_reports_stderr_on_failure() {
    let tmp = tempdir().unwrap();
    let cfg = write_config(tmp.path(), r#"["sh", "-c", "echo push rejected >&2; exit 2"]"#);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pdk"));
    cmd.arg("--config").arg(&cfg).args(["deploy", "-y"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL pdk deploy"))
        .stdout(predicate::str::contains("exit code: 2"))
        .stdout(predicate::str::contains("push rejected"));
}

#[test]
fn deploy_without_yes_needs_a_terminal() {
    let tmp = tempdir().unwrap();
    let cfg = write_config(tmp.path(), r#"["sh", "-c", "touch deployed"]"#);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pdk"));
    cmd.arg("--config").arg(&cfg).arg("deploy").stdin(Stdio::null());
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("pass --yes"));

    assert!(!tmp.path().join("deployed").exists());
}
