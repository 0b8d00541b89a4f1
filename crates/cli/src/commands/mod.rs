// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod ide;
pub mod log;
pub mod setup;
pub mod subtasks;
pub mod types;

use std::future::Future;

use pl_core::pr;

use crate::cli::IssueArgs;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::tracker::TrackerClient;

/// Run a future to completion on a single-threaded runtime.
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Io(std::io::Error::other(format!("tokio: {}", e))))?;
    Ok(rt.block_on(future))
}

/// Build a tracker client from configured settings.
pub fn tracker_client(settings: &Settings) -> Result<TrackerClient> {
    let base_url = settings.tracker_base_url()?;
    let token = settings.require_token()?;
    TrackerClient::new(&base_url, token)
}

/// Resolve the issue ID from an explicit argument or a PR title.
pub fn resolve_issue_id(args: &IssueArgs) -> Result<String> {
    if let Some(issue) = &args.issue {
        let issue = issue.trim();
        if issue.is_empty() {
            return Err(Error::FieldEmpty { field: "Issue ID" });
        }
        return Ok(issue.to_string());
    }
    let title = args.title.as_deref().unwrap_or_default();
    pr::extract_issue_id(title).ok_or_else(|| Error::IssueIdNotFound(title.to_string()))
}

/// Resolve a repository name from a name or a PR URL.
pub fn resolve_repo(target: &str) -> Result<String> {
    let target = target.trim();
    if target.contains("://") {
        if !pr::is_pr_url(target) {
            tracing::debug!(url = target, "not a pull request URL, using its repository");
        }
        return pr::repo_name_from_url(target).ok_or_else(|| Error::RepoNotFound(target.to_string()));
    }
    if target.is_empty() {
        return Err(Error::FieldEmpty {
            field: "Repository",
        });
    }
    Ok(target.to_string())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
