// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Classifiers over tracker data.
//!
//! Both classifiers use case-insensitive substring matching rather than
//! equality, because the tracker lets administrators reword link and type
//! labels ("Subtask of", "is subtask of", "User Story", ...).

use crate::issue::{IssueLink, IssueRef, LinkDirection};

/// Label fragment identifying a parent/subtask link, read target to source.
const SUBTASK_LABEL: &str = "subtask of";

/// Type label fragment identifying aggregate (story-like) issues.
const AGGREGATE_TYPE_TOKEN: &str = "story";

/// Returns true if `link` points from the current issue to its own subtasks.
///
/// Only OUTWARD links qualify. An INWARD link carrying the same "subtask of"
/// label means the current issue is itself the subtask, so the related issue
/// is its parent.
pub fn is_subtask_link(link: &IssueLink) -> bool {
    link.direction == LinkDirection::Outward
        && link
            .link_type
            .target_to_source
            .to_lowercase()
            .contains(SUBTASK_LABEL)
}

/// Extract the subtasks of the current issue from its link listing.
///
/// Related issues of every matching link are concatenated in link order, then
/// in the order the tracker listed them within each link. No sorting and no
/// de-duplication. An empty result means "no subtasks", never an error.
pub fn classify_subtask_links(links: &[IssueLink]) -> Vec<IssueRef> {
    links
        .iter()
        .filter(|link| is_subtask_link(link))
        .flat_map(|link| link.related_issues.iter().cloned())
        .collect()
}

/// Returns true if the issue type is an aggregate that cannot take logged time.
///
/// Unknown or empty types are treated as directly loggable.
pub fn is_aggregate_type(type_label: Option<&str>) -> bool {
    match type_label.map(str::trim) {
        None | Some("") => false,
        Some(label) => label.to_lowercase().contains(AGGREGATE_TYPE_TOKEN),
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
