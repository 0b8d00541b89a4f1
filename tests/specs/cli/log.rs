// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `prlog log` and `prlog subtasks` against a mock tracker.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yare::parameterized;

const TOKEN: &str = "perm:abcdef123456";

fn prlog(config: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("prlog");
    cmd.env("PRLOG_CONFIG_DIR", config.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a complete settings file pointing at `base_url`.
fn configured(base_url: &str) -> TempDir {
    let config = TempDir::new().unwrap();
    let content = format!(
        "endpoint = \"{base_url}\"\ntoken = \"{TOKEN}\"\n\n[work_item_type]\nid = \"61-0\"\nname = \"Development\"\n"
    );
    std::fs::write(config.path().join("settings.toml"), content).unwrap();
    config
}

async fn mount_issue(server: &MockServer, id: &str, issue_type: &str, subtasks: &[(&str, &str)]) {
    Mock::given(method("GET"))
        .and(path(format!("/api/issues/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "idReadable": id,
            "customFields": [{"name": "Type", "value": {"name": issue_type}}]
        })))
        .mount(server)
        .await;

    let trimmed: Vec<Value> = subtasks
        .iter()
        .map(|(sub, summary)| json!({"idReadable": sub, "summary": summary}))
        .collect();
    Mock::given(method("GET"))
        .and(path(format!("/api/issues/{id}/links")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "direction": "OUTWARD",
                "linkType": {"sourceToTarget": "parent for", "targetToSource": "subtask of"},
                "trimmedIssues": trimmed
            },
            {
                "direction": "INWARD",
                "linkType": {"sourceToTarget": "parent for", "targetToSource": "subtask of"},
                "trimmedIssues": [{"idReadable": "EPIC-1", "summary": "Parent"}]
            }
        ])))
        .mount(server)
        .await;
}

async fn expect_work_item(server: &MockServer, target: &str, minutes: u32) {
    Mock::given(method("POST"))
        .and(path(format!("/api/issues/{target}/timeTracking/workItems")))
        .and(body_partial_json(json!({
            "duration": {"minutes": minutes},
            "type": {"id": "61-0"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "wi-1"})))
        .expect(1)
        .mount(server)
        .await;
}

// =============================================================================
// Configuration and argument errors (no tracker needed)
// =============================================================================

#[test]
fn log_without_settings_explains_setup() {
    let config = TempDir::new().unwrap();
    prlog(&config)
        .args(["log", "30m", "PROJ-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tracker endpoint is not configured"));
}

#[test]
fn log_without_type_explains_setup() {
    let config = TempDir::new().unwrap();
    std::fs::write(
        config.path().join("settings.toml"),
        format!("endpoint = \"acme\"\ntoken = \"{TOKEN}\"\n"),
    )
    .unwrap();
    prlog(&config)
        .args(["log", "30m", "PROJ-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("work item type is not configured"))
        .stderr(predicate::str::contains("prlog setup type"));
}

#[parameterized(
    unknown_unit = { "2w", "invalid time format" },
    trailing_text = { "1h30m", "invalid time format" },
    zero = { "0m", "invalid time value" },
    below_a_minute = { "0.2m", "invalid time value" },
    comma_decimal = { "1,5h", "invalid time format" },
)]
fn log_rejects_bad_duration(duration: &str, message: &str) {
    // Unreachable tracker: the duration must fail before any request.
    let config = configured("http://127.0.0.1:9");
    prlog(&config)
        .args(["log", duration, "PROJ-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(message));
}

#[test]
fn title_without_id_fails() {
    let config = configured("http://127.0.0.1:9");
    prlog(&config)
        .args(["log", "30m", "--title", "fix the login page"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no issue ID found"));
}

#[test]
fn issue_and_title_conflict() {
    let config = configured("http://127.0.0.1:9");
    prlog(&config)
        .args(["log", "30m", "PROJ-1", "--title", "PROJ-2 x"])
        .assert()
        .failure();
}

// =============================================================================
// Direct logging
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn log_on_task_posts_work_item() {
    let server = MockServer::start().await;
    mount_issue(&server, "PROJ-1", "Task", &[]).await;
    expect_work_item(&server, "PROJ-1", 90).await;
    let config = configured(&server.uri());

    prlog(&config)
        .args(["log", "1.5h", "PROJ-1", "-c", "Pairing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged 1h 30m on PROJ-1"));

    let requests = server.received_requests().await.unwrap();
    let post = requests
        .iter()
        .find(|r| r.method.as_str() == "POST")
        .unwrap();
    let body: Value = serde_json::from_slice(&post.body).unwrap();
    assert_eq!(body["text"], "Pairing");
    assert_eq!(
        post.headers.get("authorization").unwrap().to_str().unwrap(),
        format!("Bearer {TOKEN}")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn log_takes_issue_from_title() {
    let server = MockServer::start().await;
    mount_issue(&server, "PROJ-7", "Bug", &[]).await;
    expect_work_item(&server, "PROJ-7", 480).await;
    let config = configured(&server.uri());

    prlog(&config)
        .args(["log", "1d", "--title", "[PROJ-7] Fix login"])
        .assert()
        .success()
        .stdout(predicate::str::contains("on PROJ-7"));
}

#[tokio::test(flavor = "multi_thread")]
async fn dry_run_prints_payload_without_posting() {
    let server = MockServer::start().await;
    mount_issue(&server, "PROJ-1", "Task", &[]).await;
    let config = configured(&server.uri());

    prlog(&config)
        .args(["log", "45", "PROJ-1", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would log 45m on PROJ-1"))
        .stdout(predicate::str::contains("\"minutes\": 45"));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.method.as_str() == "GET"));
}

#[tokio::test(flavor = "multi_thread")]
async fn tracker_error_is_reported() {
    let server = MockServer::start().await;
    mount_issue(&server, "PROJ-1", "Task", &[]).await;
    Mock::given(method("POST"))
        .and(path("/api/issues/PROJ-1/timeTracking/workItems"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({"error_description": "Issue is read-only"})),
        )
        .mount(&server)
        .await;
    let config = configured(&server.uri());

    prlog(&config)
        .args(["log", "30m", "PROJ-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("request failed"));
}

// =============================================================================
// Stories
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn story_logs_on_chosen_subtask() {
    let server = MockServer::start().await;
    mount_issue(&server, "STORY-50", "User Story", &[("TASK-51", "API"), ("TASK-52", "UI")]).await;
    expect_work_item(&server, "TASK-52", 120).await;
    let config = configured(&server.uri());

    prlog(&config)
        .args(["log", "2h", "STORY-50", "--subtask", "TASK-52"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged 2h on TASK-52"));
}

#[tokio::test(flavor = "multi_thread")]
async fn story_without_subtask_choice_is_refused() {
    let server = MockServer::start().await;
    mount_issue(&server, "STORY-50", "User Story", &[("TASK-51", "API")]).await;
    let config = configured(&server.uri());

    prlog(&config)
        .args(["log", "2h", "STORY-50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must select a subtask"))
        .stderr(predicate::str::contains("TASK-51"));
}

#[tokio::test(flavor = "multi_thread")]
async fn story_rejects_foreign_subtask() {
    let server = MockServer::start().await;
    mount_issue(&server, "STORY-50", "User Story", &[("TASK-51", "API")]).await;
    let config = configured(&server.uri());

    prlog(&config)
        .args(["log", "2h", "STORY-50", "-s", "EPIC-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'EPIC-1' is not a subtask of STORY-50"));
}

#[tokio::test(flavor = "multi_thread")]
async fn story_without_subtasks_is_blocked() {
    let server = MockServer::start().await;
    mount_issue(&server, "STORY-60", "Story", &[]).await;
    let config = configured(&server.uri());

    prlog(&config)
        .args(["log", "2h", "STORY-60"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("aggregate-type issue with no subtasks"));
}

// =============================================================================
// subtasks
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn subtasks_lists_outward_children_only() {
    let server = MockServer::start().await;
    mount_issue(&server, "STORY-50", "User Story", &[("TASK-51", "API"), ("TASK-52", "UI")]).await;
    let config = configured(&server.uri());

    prlog(&config)
        .args(["subtasks", "STORY-50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TASK-51"))
        .stdout(predicate::str::contains("TASK-52"))
        .stdout(predicate::str::contains("EPIC-1").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn subtasks_json_reports_decision() {
    let server = MockServer::start().await;
    mount_issue(&server, "STORY-50", "User Story", &[("TASK-51", "API")]).await;
    let config = configured(&server.uri());

    let output = prlog(&config)
        .args(["subtasks", "STORY-50", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["issue"], "STORY-50");
    assert_eq!(report["aggregate"], true);
    assert_eq!(report["decision"]["outcome"], "require_subtask");
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_links_degrade_to_no_subtasks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/issues/PROJ-3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customFields": [{"name": "Type", "value": {"name": "Task"}}]
        })))
        .mount(&server)
        .await;
    let config = configured(&server.uri());

    let output = prlog(&config)
        .args(["subtasks", "PROJ-3", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["decision"]["outcome"], "allow_direct");
}

#[tokio::test(flavor = "multi_thread")]
async fn story_without_subtasks_is_blocked_even_with_subtask_flag() {
    let server = MockServer::start().await;
    mount_issue(&server, "STORY-60", "Story", &[]).await;
    let config = configured(&server.uri());

    prlog(&config)
        .args(["log", "2h", "STORY-60", "--subtask", "TASK-61"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("aggregate-type issue with no subtasks"))
        .stderr(predicate::str::contains("is not a subtask").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_links_still_log_on_a_task() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/issues/PROJ-4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customFields": [{"name": "Type", "value": {"name": "Task"}}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/issues/PROJ-4/links"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    expect_work_item(&server, "PROJ-4", 30).await;
    let config = configured(&server.uri());

    prlog(&config)
        .args(["log", "30m", "PROJ-4", "-s", "PROJ-5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged 30m on PROJ-4"));
}

#[test]
fn negative_duration_reaches_the_parser() {
    let config = configured("http://127.0.0.1:9");
    prlog(&config)
        .args(["log", "-5m", "PROJ-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid time format: '-5m'"));
}
