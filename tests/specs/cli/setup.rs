// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `prlog setup` and the settings file it maintains.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
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

fn show_json(config: &TempDir) -> Value {
    let output = prlog(config)
        .args(["setup", "show", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// endpoint
// =============================================================================

#[parameterized(
    subdomain = { "acme", "https://acme.youtrack.cloud" },
    full_url = { "https://yt.example.com/", "https://yt.example.com" },
    plain_http = { "http://127.0.0.1:8080", "http://127.0.0.1:8080" },
)]
fn endpoint_reports_base_url(endpoint: &str, base_url: &str) {
    let config = TempDir::new().unwrap();
    prlog(&config)
        .args(["setup", "endpoint", endpoint])
        .assert()
        .success()
        .stdout(predicate::str::contains(base_url));

    let shown = show_json(&config);
    assert_eq!(shown["base_url"], base_url);
}

#[test]
fn endpoint_rejects_blank() {
    let config = TempDir::new().unwrap();
    prlog(&config)
        .args(["setup", "endpoint", "   "])
        .assert()
        .failure();
    assert!(!config.path().join("settings.toml").exists());
}

// =============================================================================
// token
// =============================================================================

#[test]
fn token_is_masked_in_show() {
    let config = TempDir::new().unwrap();
    prlog(&config)
        .args(["setup", "token", "perm:abcdef123456"])
        .assert()
        .success()
        .stdout(predicate::str::contains("API token saved"));

    prlog(&config)
        .args(["setup", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("perm****"))
        .stdout(predicate::str::contains("abcdef123456").not());

    assert_eq!(show_json(&config)["token"], "perm****");
}

#[test]
fn token_from_stdin_takes_first_line() {
    let config = TempDir::new().unwrap();
    prlog(&config)
        .args(["setup", "token", "--stdin"])
        .write_stdin("\n  perm:from-stdin-token  \nignored\n")
        .assert()
        .success();

    let content = std::fs::read_to_string(config.path().join("settings.toml")).unwrap();
    assert!(content.contains("perm:from-stdin-token"));
    assert!(!content.contains("ignored"));
}

#[test]
fn token_from_empty_stdin_fails() {
    let config = TempDir::new().unwrap();
    prlog(&config)
        .args(["setup", "token", "--stdin"])
        .write_stdin("\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be empty"));
}

#[cfg(unix)]
#[test]
fn settings_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let config = TempDir::new().unwrap();
    prlog(&config)
        .args(["setup", "token", "perm:abcdef123456"])
        .assert()
        .success();

    let mode = std::fs::metadata(config.path().join("settings.toml"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

// =============================================================================
// show
// =============================================================================

#[test]
fn show_on_fresh_config_lists_unset_values() {
    let config = TempDir::new().unwrap();
    prlog(&config)
        .args(["setup", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"))
        .stdout(predicate::str::contains("http://127.0.0.1:42800"));
}

#[test]
fn show_json_has_all_settings() {
    let config = TempDir::new().unwrap();
    prlog(&config)
        .args(["setup", "endpoint", "acme"])
        .assert()
        .success();
    prlog(&config)
        .args(["setup", "ide-daemon", "http://127.0.0.1:9999/"])
        .assert()
        .success();

    let shown = show_json(&config);
    assert_eq!(shown["endpoint"], "acme");
    assert_eq!(shown["token"], Value::Null);
    assert_eq!(shown["work_item_type"], Value::Null);
    assert_eq!(shown["ide_daemon_url"], "http://127.0.0.1:9999");
    assert_eq!(shown["ide_project_paths"], json!({}));
}

#[test]
fn daemon_url_env_overrides_settings() {
    let config = TempDir::new().unwrap();
    prlog(&config)
        .args(["setup", "ide-daemon", "http://127.0.0.1:9999"])
        .assert()
        .success();

    let output = prlog(&config)
        .env("PRLOG_IDE_DAEMON_URL", "http://127.0.0.1:7000")
        .args(["setup", "show", "-o", "json"])
        .output()
        .unwrap();
    let shown: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(shown["ide_daemon_url"], "http://127.0.0.1:7000");
}

#[test]
fn malformed_settings_file_is_reported() {
    let config = TempDir::new().unwrap();
    std::fs::write(config.path().join("settings.toml"), "endpoint = [").unwrap();
    prlog(&config)
        .args(["setup", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse settings"));
}

// =============================================================================
// type
// =============================================================================

async fn tracker_with_types() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/timeTrackingSettings/workItemTypes"))
        .and(header("Authorization", "Bearer perm:abcdef123456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "61-0", "name": "Development"},
            {"id": "61-1", "name": "Code Review"}
        ])))
        .mount(&server)
        .await;
    server
}

fn configure(config: &TempDir, server: &MockServer) {
    prlog(config)
        .args(["setup", "endpoint", &server.uri()])
        .assert()
        .success();
    prlog(config)
        .args(["setup", "token", "perm:abcdef123456"])
        .assert()
        .success();
}

#[tokio::test(flavor = "multi_thread")]
async fn type_by_name_ignores_case() {
    let server = tracker_with_types().await;
    let config = TempDir::new().unwrap();
    configure(&config, &server);

    prlog(&config)
        .args(["setup", "type", "code review"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Code Review"));

    let shown = show_json(&config);
    assert_eq!(shown["work_item_type"], json!({"id": "61-1", "name": "Code Review"}));
}

#[tokio::test(flavor = "multi_thread")]
async fn type_by_id() {
    let server = tracker_with_types().await;
    let config = TempDir::new().unwrap();
    configure(&config, &server);

    prlog(&config)
        .args(["setup", "type", "61-0"])
        .assert()
        .success();

    assert_eq!(show_json(&config)["work_item_type"]["name"], "Development");
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_type_lists_available() {
    let server = tracker_with_types().await;
    let config = TempDir::new().unwrap();
    configure(&config, &server);

    prlog(&config)
        .args(["setup", "type", "Design"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown work item type: 'Design'"))
        .stderr(predicate::str::contains("Development, Code Review"));
}

#[tokio::test(flavor = "multi_thread")]
async fn types_marks_selected() {
    let server = tracker_with_types().await;
    let config = TempDir::new().unwrap();
    configure(&config, &server);
    prlog(&config)
        .args(["setup", "type", "Development"])
        .assert()
        .success();

    prlog(&config)
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("Development (selected)"))
        .stdout(predicate::str::contains("Code Review (selected)").not());
}

#[test]
fn type_without_endpoint_explains_setup() {
    let config = TempDir::new().unwrap();
    prlog(&config)
        .args(["setup", "type", "Development"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tracker endpoint is not configured"))
        .stderr(predicate::str::contains("prlog setup endpoint"));
}

#[test]
fn interactive_type_needs_terminal() {
    let config = TempDir::new().unwrap();
    prlog(&config)
        .args(["setup", "endpoint", "http://127.0.0.1:9"])
        .assert()
        .success();
    prlog(&config)
        .args(["setup", "token", "perm:abcdef123456"])
        .assert()
        .success();

    prlog(&config)
        .args(["setup", "type"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
