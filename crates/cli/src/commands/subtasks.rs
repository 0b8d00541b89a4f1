// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use pl_core::Outcome;

use crate::cli::{IssueArgs, OutputFormat};
use crate::colors;
use crate::config;
use crate::error::Result;
use crate::session::LogSession;

use super::{block_on, resolve_issue_id, tracker_client};

/// Show an issue's subtasks and where logged time would go.
pub fn run(issue: IssueArgs, output: OutputFormat) -> Result<()> {
    let (settings, _) = config::load()?;
    let issue_id = resolve_issue_id(&issue)?;
    let client = tracker_client(&settings)?;
    let session = block_on(LogSession::load(&client, &issue_id))?;

    match output {
        OutputFormat::Text => print!("{}", render_text(&session)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&render_json(&session))?),
    }
    Ok(())
}

pub(crate) fn render_text(session: &LogSession) -> String {
    let decision = session.decision();
    let mut out = format!(
        "{} [{}]\n",
        session.issue_id(),
        session.issue_type().unwrap_or("unknown type")
    );

    if session.subtasks().is_empty() {
        out.push_str("  no subtasks\n");
    } else {
        out.push_str(&format!("{}\n", colors::header("Subtasks:")));
        for subtask in session.subtasks() {
            out.push_str(&format!("  {}\n", subtask));
        }
    }

    let status = match (decision.outcome, decision.target_issue_id.as_deref()) {
        (Outcome::AllowDirect, Some(target)) => colors::good(&format!("time goes to {}", target)),
        _ => colors::warn(decision.reason.as_deref().unwrap_or(decision.outcome.as_str())),
    };
    out.push_str(&format!("{} {}\n", colors::header("Logging:"), status));
    out
}

pub(crate) fn render_json(session: &LogSession) -> serde_json::Value {
    serde_json::json!({
        "issue": session.issue_id(),
        "issue_type": session.issue_type(),
        "aggregate": session.is_aggregate(),
        "decision": session.decision(),
    })
}

#[cfg(test)]
#[path = "subtasks_tests.rs"]
mod tests;
