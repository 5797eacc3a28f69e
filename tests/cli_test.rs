//! Integration tests for CLI argument parsing and the catalog command.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn labready() -> Command {
    let mut cmd = Command::new(cargo_bin("labready"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() {
    labready()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Environment readiness checks"));
}

#[test]
fn cli_shows_version() {
    labready()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_rejects_unknown_flag() {
    labready().arg("--definitely-not-a-flag").assert().failure();
}

#[test]
fn catalog_prints_default_yaml() {
    let temp = TempDir::new().unwrap();
    labready()
        .current_dir(temp.path())
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("AZURE_OPENAI_ENDPOINT"))
        .stdout(predicate::str::contains("samples/audio001.wav"))
        .stdout(predicate::str::contains("semantic_kernel"));
}

#[test]
fn catalog_json_is_parseable() {
    let temp = TempDir::new().unwrap();
    let output = labready()
        .current_dir(temp.path())
        .args(["catalog", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["required_vars"].as_array().unwrap().len(), 4);
    assert_eq!(value["packages"].as_array().unwrap().len(), 13);
}

#[test]
fn catalog_yaml_flag_selects_the_default_format() {
    let temp = TempDir::new().unwrap();
    labready()
        .current_dir(temp.path())
        .args(["catalog", "--yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("required_vars:"))
        .stdout(predicate::str::contains("AZURE_OPENAI_ENDPOINT"));
}

#[test]
fn catalog_refuses_both_output_formats() {
    labready()
        .args(["catalog", "--json", "--yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn catalog_respects_project_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("labready.yml"),
        "required_vars: [MY_ONLY_KEY]\n",
    )
    .unwrap();

    labready()
        .current_dir(temp.path())
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("MY_ONLY_KEY"));
}

#[test]
fn explicit_missing_catalog_exits_with_two() {
    let temp = TempDir::new().unwrap();
    labready()
        .current_dir(temp.path())
        .args(["check", "--catalog", "absent.yml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Catalog not found"));
}

#[test]
fn completions_generate_for_bash() {
    labready()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("labready"));
}
