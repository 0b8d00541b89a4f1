// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pull request helpers: tracker IDs in titles, PR URLs, repository names.

use regex::Regex;
use std::sync::LazyLock;

// Pre-compiled regexes. Patterns are hard-coded and known-valid.
static ISSUE_ID_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"[A-Z]+-\d+") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static PR_PATH_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"/pull/\d+") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static REPO_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^(?:https?://[^/]+)?/[^/]+/([^/?#]+)") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Extract the first tracker issue ID (e.g., "PROJ-123") from a PR title.
pub fn extract_issue_id(title: &str) -> Option<String> {
    ISSUE_ID_RE.find(title).map(|m| m.as_str().to_string())
}

/// Returns true if the URL points at an individual pull request.
pub fn is_pr_url(url: &str) -> bool {
    PR_PATH_RE.is_match(url)
}

/// Extract the repository name from a GitHub URL or path.
///
/// `https://github.com/acme/widgets/pull/12` yields `widgets`.
pub fn repo_name_from_url(url: &str) -> Option<String> {
    REPO_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
#[path = "pr_tests.rs"]
mod tests;
