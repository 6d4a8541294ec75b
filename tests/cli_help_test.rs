//! CLI help output integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_root_help() {
    Command::cargo_bin("upim")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Batch Unity package importer"));
}

#[test]
fn test_batch_help() {
    Command::cargo_bin("upim")
        .unwrap()
        .args(["batch", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--poll-interval-ms"));
}

#[test]
fn test_quick_help() {
    Command::cargo_bin("upim")
        .unwrap()
        .args(["quick", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_quick_requires_folder() {
    Command::cargo_bin("upim")
        .unwrap()
        .arg("quick")
        .assert()
        .failure()
        .stderr(predicate::str::contains("FOLDER"));
}

#[test]
fn test_unknown_subcommand_fails() {
    Command::cargo_bin("upim")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure();
}
