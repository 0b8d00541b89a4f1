// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `prlog ide`: project paths and daemon checkout.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yare::parameterized;

fn prlog(config: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("prlog");
    cmd.env("PRLOG_CONFIG_DIR", config.path())
        .env("NO_COLOR", "1")
        .env_remove("PRLOG_IDE_DAEMON_URL")
        .env_remove("RUST_LOG");
    cmd
}

fn show_paths(config: &TempDir) -> Value {
    let output = prlog(config)
        .args(["ide", "show", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// configure / show
// =============================================================================

#[parameterized(
    repo_name = { "web" },
    pr_url = { "https://github.com/acme/web/pull/7" },
    repo_url = { "https://github.com/acme/web" },
)]
fn configure_stores_path_by_repo(target: &str) {
    let config = TempDir::new().unwrap();
    prlog(&config)
        .args(["ide", "configure", target, "/src/web"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project path for web set to /src/web"));

    assert_eq!(show_paths(&config), json!({"web": "/src/web"}));
}

#[test]
fn configure_keeps_other_repos() {
    let config = TempDir::new().unwrap();
    prlog(&config)
        .args(["ide", "configure", "web", "/src/web"])
        .assert()
        .success();
    prlog(&config)
        .args(["ide", "configure", "api", "/src/api"])
        .assert()
        .success();
    prlog(&config)
        .args(["ide", "configure", "web", "/work/web"])
        .assert()
        .success();

    assert_eq!(
        show_paths(&config),
        json!({"api": "/src/api", "web": "/work/web"})
    );
}

#[test]
fn configure_rejects_blank_path() {
    let config = TempDir::new().unwrap();
    prlog(&config)
        .args(["ide", "configure", "web", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project path cannot be empty"));
}

#[test]
fn configure_rejects_url_without_repo() {
    let config = TempDir::new().unwrap();
    prlog(&config)
        .args(["ide", "configure", "https://github.com/", "/src/web"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no repository name"));
}

#[test]
fn show_without_paths() {
    let config = TempDir::new().unwrap();
    prlog(&config)
        .args(["ide", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No project paths configured."));
}

// =============================================================================
// open
// =============================================================================

#[test]
fn open_without_path_explains_configure() {
    let config = TempDir::new().unwrap();
    prlog(&config)
        .args(["ide", "open", "web", "feature/login"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no project path configured for 'web'"))
        .stderr(predicate::str::contains("prlog ide configure web <path>"));
}

async fn daemon(success: bool) -> MockServer {
    let server = MockServer::start().await;
    let body = if success {
        json!({"success": true})
    } else {
        json!({"success": false, "error": "project not open"})
    };
    Mock::given(method("POST"))
        .and(path("/ide/checkout"))
        .and(body_json(json!({"projectPath": "/src/web", "branch": "feature/login"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;
    server
}

#[tokio::test(flavor = "multi_thread")]
async fn open_checks_out_through_daemon() {
    let server = daemon(true).await;
    let config = TempDir::new().unwrap();
    prlog(&config)
        .args(["ide", "configure", "web", "/src/web"])
        .assert()
        .success();

    prlog(&config)
        .env("PRLOG_IDE_DAEMON_URL", server.uri())
        .args([
            "ide",
            "open",
            "https://github.com/acme/web/pull/7",
            "feature/login",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked out \"feature/login\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn open_with_path_stores_it_first() {
    let server = daemon(true).await;
    let config = TempDir::new().unwrap();
    prlog(&config)
        .args(["setup", "ide-daemon", &server.uri()])
        .assert()
        .success();

    prlog(&config)
        .args(["ide", "open", "web", "feature/login", "--path", "/src/web"])
        .assert()
        .success();

    assert_eq!(show_paths(&config), json!({"web": "/src/web"}));
}
