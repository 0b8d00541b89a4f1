// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `prlog log`: record spent time on a PR's issue.
//!
//! Mirrors the logging dialog: configuration check, issue type and links
//! fetched together, policy decision, subtask choice, then submission.

use chrono::{DateTime, Utc};

use pl_core::{parse_duration_to_minutes, Outcome};

use crate::cli::IssueArgs;
use crate::colors;
use crate::config;
use crate::error::{Error, Result};
use crate::picker::{self, PickItem};
use crate::session::LogSession;
use crate::tracker::{TrackerClient, Transport, WorkItemRequest, WorkItemType};

use super::{block_on, resolve_issue_id, tracker_client};

/// Inputs of a single log invocation.
#[derive(Debug, Clone)]
pub(crate) struct LogOptions<'a> {
    pub issue_id: &'a str,
    pub minutes: u32,
    pub work_item_type: &'a WorkItemType,
    pub subtask: Option<&'a str>,
    pub comment: Option<&'a str>,
    pub dry_run: bool,
    pub now: DateTime<Utc>,
}

/// What was (or would have been) submitted.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LogReport {
    pub target: String,
    pub item: WorkItemRequest,
    pub submitted: bool,
}

pub fn run(
    duration: String,
    issue: IssueArgs,
    subtask: Option<String>,
    comment: Option<String>,
    dry_run: bool,
) -> Result<()> {
    let (settings, _) = config::load()?;
    let issue_id = resolve_issue_id(&issue)?;
    let client = tracker_client(&settings)?;
    let work_item_type = settings.require_work_item_type()?;
    let minutes = parse_duration_to_minutes(&duration)?;

    let options = LogOptions {
        issue_id: &issue_id,
        minutes,
        work_item_type,
        subtask: subtask.as_deref(),
        comment: comment.as_deref(),
        dry_run,
        now: Utc::now(),
    };
    let report = block_on(log_time(&client, options, choose_interactively))??;

    if report.submitted {
        println!(
            "{} {} on {}",
            colors::good("Logged"),
            format_minutes(report.item.duration.minutes),
            report.target
        );
    } else {
        println!(
            "Would log {} on {}",
            format_minutes(report.item.duration.minutes),
            report.target
        );
        println!("{}", serde_json::to_string_pretty(&report.item)?);
    }
    Ok(())
}

/// Resolve the target for `options.issue_id` and submit the work item.
///
/// `choose` is asked for a subtask only when the issue requires one and none
/// was given; returning `None` leaves the session blocked.
pub(crate) async fn log_time<T, F>(
    client: &TrackerClient<T>,
    options: LogOptions<'_>,
    choose: F,
) -> Result<LogReport>
where
    T: Transport,
    F: FnOnce(&LogSession) -> Result<Option<String>>,
{
    let mut session = LogSession::load(client, options.issue_id).await;

    if session.decision().outcome == Outcome::Blocked {
        // A blocked decision has no target, so this reports the policy reason.
        session.target()?;
    }

    let subtask = options.subtask.map(str::trim).filter(|s| !s.is_empty());
    if let Some(subtask) = subtask {
        if session.subtasks().is_empty() {
            tracing::warn!(
                issue = options.issue_id,
                subtask,
                "issue has no subtasks, logging on the issue itself"
            );
        } else {
            session.select_subtask(subtask)?;
        }
    } else if session.decision().outcome == Outcome::RequireSubtask {
        if let Some(chosen) = choose(&session)? {
            session.select_subtask(&chosen)?;
        }
    }

    let (target, item) = session.work_item(
        options.minutes,
        options.work_item_type,
        options.comment,
        options.now,
    )?;

    if options.dry_run {
        tracing::debug!(issue = %target, "dry run, not submitting");
        return Ok(LogReport {
            target,
            item,
            submitted: false,
        });
    }

    client.create_work_item(&target, &item).await?;
    tracing::info!(issue = %target, minutes = item.duration.minutes, "work item created");
    Ok(LogReport {
        target,
        item,
        submitted: true,
    })
}

/// Ask for a subtask on a terminal; elsewhere leave the choice unset.
fn choose_interactively(session: &LogSession) -> Result<Option<String>> {
    if !picker::is_interactive() {
        return Ok(None);
    }
    let items: Vec<PickItem> = session
        .subtasks()
        .iter()
        .map(|s| PickItem::new(s.id.clone(), s.summary.clone()))
        .collect();
    let prompt = format!(
        "{} is a {}; log time on which subtask?",
        session.issue_id(),
        session.issue_type().unwrap_or("story")
    );
    let idx = picker::pick(&prompt, &items)?;
    session
        .subtasks()
        .get(idx)
        .map(|s| Some(s.id.clone()))
        .ok_or(Error::Cancelled)
}

/// Format minutes as a compact duration, e.g. `1h 30m`.
pub(crate) fn format_minutes(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
