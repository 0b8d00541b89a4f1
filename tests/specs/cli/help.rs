// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for help and version output.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use yare::parameterized;

fn prlog() -> Command {
    let mut cmd = cargo_bin_cmd!("prlog");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_command_groups() {
    prlog()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Time Tracking:"))
        .stdout(predicate::str::contains("IDE:"))
        .stdout(predicate::str::contains("Setup:"))
        .stdout(predicate::str::contains("Get started:"));
}

#[test]
fn no_arguments_prints_usage() {
    prlog()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[parameterized(
    log = { &["log"] },
    subtasks = { &["subtasks"] },
    types = { &["types"] },
    ide_open = { &["ide", "open"] },
    ide_configure = { &["ide", "configure"] },
    setup_endpoint = { &["setup", "endpoint"] },
    setup_token = { &["setup", "token"] },
    setup_type = { &["setup", "type"] },
    setup_ide_daemon = { &["setup", "ide-daemon"] },
)]
fn subcommand_help(args: &[&str]) {
    prlog()
        .args(args)
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: prlog"));
}

#[test]
fn log_help_documents_durations() {
    prlog()
        .args(["log", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.5d"))
        .stdout(predicate::str::contains("--subtask"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn version_flag() {
    prlog()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("prlog "));
}

#[test]
fn unknown_command_fails() {
    prlog()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
