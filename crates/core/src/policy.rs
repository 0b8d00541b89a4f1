// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Time-logging policy.
//!
//! Decides where logged time may go, given whether the issue is an aggregate,
//! which subtasks it has, and what the user selected. The policy performs no
//! I/O and never fails: "no subtasks" and "no selection" are outcomes.

use serde::Serialize;
use std::fmt;

use crate::issue::IssueRef;

/// Reason attached to [`Outcome::Blocked`].
pub const REASON_NO_SUBTASKS: &str = "cannot log time on an aggregate-type issue with no subtasks";

/// Reason attached to [`Outcome::RequireSubtask`].
pub const REASON_SELECT_SUBTASK: &str = "must select a subtask before logging time";

/// Result category of a policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Time may be submitted against `target_issue_id`.
    AllowDirect,
    /// The issue is an aggregate with subtasks; one must be picked first.
    RequireSubtask,
    /// The issue is an aggregate without subtasks; submission is disabled.
    Blocked,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::AllowDirect => "allow_direct",
            Outcome::RequireSubtask => "require_subtask",
            Outcome::Blocked => "blocked",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inputs to [`evaluate`].
#[derive(Debug, Clone, Copy)]
pub struct PolicyInput<'a> {
    pub is_aggregate: bool,
    pub subtasks: &'a [IssueRef],
    /// The subtask the user picked. An empty string counts as no selection.
    pub selected_subtask_id: Option<&'a str>,
    pub current_issue_id: &'a str,
}

/// Derived decision; recomputed whenever the selection or the fetched data change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggingDecision {
    pub outcome: Outcome,
    pub target_issue_id: Option<String>,
    pub reason: Option<String>,
    pub candidate_subtasks: Vec<IssueRef>,
}

impl LoggingDecision {
    fn allow(target: &str, subtasks: &[IssueRef]) -> Self {
        LoggingDecision {
            outcome: Outcome::AllowDirect,
            target_issue_id: Some(target.to_string()),
            reason: None,
            candidate_subtasks: subtasks.to_vec(),
        }
    }

    fn refuse(outcome: Outcome, reason: &str, subtasks: &[IssueRef]) -> Self {
        LoggingDecision {
            outcome,
            target_issue_id: None,
            reason: Some(reason.to_string()),
            candidate_subtasks: subtasks.to_vec(),
        }
    }

    /// Returns true if time can be submitted now.
    pub fn is_submittable(&self) -> bool {
        self.outcome == Outcome::AllowDirect && self.target_issue_id.is_some()
    }
}

/// Evaluate the time-logging policy.
///
/// Rules, in order:
/// 1. aggregate without subtasks: blocked.
/// 2. aggregate with subtasks: the selection is required and becomes the target.
/// 3. otherwise: the selection if any, else the current issue.
pub fn evaluate(input: PolicyInput<'_>) -> LoggingDecision {
    let selected = input.selected_subtask_id.filter(|id| !id.is_empty());

    if input.is_aggregate {
        if input.subtasks.is_empty() {
            return LoggingDecision::refuse(Outcome::Blocked, REASON_NO_SUBTASKS, input.subtasks);
        }
        return match selected {
            Some(id) => LoggingDecision::allow(id, input.subtasks),
            None => LoggingDecision::refuse(
                Outcome::RequireSubtask,
                REASON_SELECT_SUBTASK,
                input.subtasks,
            ),
        };
    }

    match selected {
        Some(id) if !input.subtasks.is_empty() => LoggingDecision::allow(id, input.subtasks),
        _ => LoggingDecision::allow(input.current_issue_id, input.subtasks),
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
