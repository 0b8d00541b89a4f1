// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Time-logging session.
//!
//! A [`LogSession`] is built once per `log`/`subtasks` invocation from a
//! fresh fetch of the issue's type and links. It owns the subtask selection
//! and keeps the policy decision in step with it.

use chrono::{DateTime, Utc};

use pl_core::policy::{REASON_NO_SUBTASKS, REASON_SELECT_SUBTASK};
use pl_core::{
    classify_subtask_links, evaluate, is_aggregate_type, IssueLink, IssueRef, LoggingDecision,
    Outcome, PolicyInput,
};

use crate::error::{Error, Result};
use crate::tracker::{TrackerClient, Transport, WorkItemRequest, WorkItemType};

/// Per-invocation state of the time-logging workflow.
#[derive(Debug, Clone)]
pub struct LogSession {
    issue_id: String,
    issue_type: Option<String>,
    subtasks: Vec<IssueRef>,
    selected: Option<String>,
    decision: LoggingDecision,
}

impl LogSession {
    /// Build a session from already-fetched data.
    pub fn new(issue_id: &str, issue_type: Option<String>, subtasks: Vec<IssueRef>) -> Self {
        let decision = evaluate(PolicyInput {
            is_aggregate: is_aggregate_type(issue_type.as_deref()),
            subtasks: &subtasks,
            selected_subtask_id: None,
            current_issue_id: issue_id,
        });
        LogSession {
            issue_id: issue_id.to_string(),
            issue_type,
            subtasks,
            selected: None,
            decision,
        }
    }

    /// Build a session from fetch results, degrading on failure.
    ///
    /// A failed type lookup leaves the type unknown. Failed links leave the
    /// issue without subtasks, which blocks aggregates instead of letting
    /// time land on them.
    pub fn from_fetch(
        issue_id: &str,
        issue_type: Result<Option<String>>,
        links: Result<Vec<IssueLink>>,
    ) -> Self {
        let issue_type = issue_type.unwrap_or_else(|e| {
            tracing::warn!(issue = issue_id, error = %e, "failed to fetch issue type");
            None
        });
        let subtasks = match links {
            Ok(links) => classify_subtask_links(&links),
            Err(e) => {
                tracing::warn!(issue = issue_id, error = %e, "failed to fetch issue links");
                Vec::new()
            }
        };
        tracing::debug!(
            issue = issue_id,
            issue_type = issue_type.as_deref().unwrap_or("-"),
            subtasks = subtasks.len(),
            "session loaded"
        );
        LogSession::new(issue_id, issue_type, subtasks)
    }

    /// Fetch type and links concurrently and build the session.
    pub async fn load<T: Transport>(client: &TrackerClient<T>, issue_id: &str) -> Self {
        let (issue_type, links) =
            tokio::join!(client.issue_type(issue_id), client.issue_links(issue_id));
        LogSession::from_fetch(issue_id, issue_type, links)
    }

    pub fn issue_id(&self) -> &str {
        &self.issue_id
    }

    pub fn issue_type(&self) -> Option<&str> {
        self.issue_type.as_deref()
    }

    pub fn is_aggregate(&self) -> bool {
        is_aggregate_type(self.issue_type.as_deref())
    }

    pub fn subtasks(&self) -> &[IssueRef] {
        &self.subtasks
    }

    pub fn selected_subtask(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn decision(&self) -> &LoggingDecision {
        &self.decision
    }

    /// Select the subtask that receives the time. A blank id clears the selection.
    pub fn select_subtask(&mut self, id: &str) -> Result<()> {
        let id = id.trim();
        if id.is_empty() {
            self.selected = None;
        } else if self.subtasks.iter().any(|s| s.id == id) {
            self.selected = Some(id.to_string());
        } else {
            return Err(Error::UnknownSubtask {
                id: id.to_string(),
                issue: self.issue_id.clone(),
                available: self.subtasks.iter().map(|s| s.id.clone()).collect(),
            });
        }
        self.recompute();
        Ok(())
    }

    /// The issue that receives the time, or why there is none.
    pub fn target(&self) -> Result<&str> {
        match self.decision.target_issue_id.as_deref() {
            Some(target) if self.decision.is_submittable() => Ok(target),
            _ if self.decision.outcome == Outcome::RequireSubtask => Err(Error::PolicyBlocked {
                reason: self.reason_or(REASON_SELECT_SUBTASK),
                hint: format!(
                    "pass --subtask with one of: {}",
                    self.subtasks
                        .iter()
                        .map(|s| s.id.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            }),
            _ => Err(Error::PolicyBlocked {
                reason: self.reason_or(REASON_NO_SUBTASKS),
                hint: format!("add a subtask to {} and log time there", self.issue_id),
            }),
        }
    }

    /// Resolve the target and build the work item for it.
    pub fn work_item(
        &self,
        minutes: u32,
        work_item_type: &WorkItemType,
        comment: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<(String, WorkItemRequest)> {
        let target = self.target()?.to_string();
        let item = WorkItemRequest::new(minutes, now.timestamp_millis(), &work_item_type.id, comment);
        Ok((target, item))
    }

    fn reason_or(&self, fallback: &str) -> String {
        self.decision
            .reason
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }

    fn recompute(&mut self) {
        self.decision = evaluate(PolicyInput {
            is_aggregate: self.is_aggregate(),
            subtasks: &self.subtasks,
            selected_subtask_id: self.selected.as_deref(),
            current_issue_id: &self.issue_id,
        });
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
