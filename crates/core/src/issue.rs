// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue and link types as reported by the tracker.
//!
//! These types deserialize directly from the tracker's link listing, so the
//! serde names follow the tracker's JSON (`idReadable`, `trimmedIssues`, ...).
//! Labels are free-form text: the tracker lets administrators reword them.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A lightweight reference to a ticket, used for subtask choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRef {
    /// Human-readable issue ID (e.g., "TASK-100").
    #[serde(rename = "idReadable")]
    pub id: String,
    /// One-line summary of the issue.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub summary: String,
}

impl IssueRef {
    pub fn new(id: impl Into<String>, summary: impl Into<String>) -> Self {
        IssueRef {
            id: id.into(),
            summary: summary.into(),
        }
    }
}

impl fmt::Display for IssueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.summary.is_empty() {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{} - {}", self.id, self.summary)
        }
    }
}

/// Orientation of a link relative to the issue being inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LinkDirection {
    /// The current issue is the source of the relationship.
    Outward,
    /// The current issue is the target of the relationship.
    Inward,
    /// Undirected link type (e.g., "relates to").
    Both,
}

impl LinkDirection {
    /// Returns the string representation used by the tracker.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkDirection::Outward => "OUTWARD",
            LinkDirection::Inward => "INWARD",
            LinkDirection::Both => "BOTH",
        }
    }
}

impl fmt::Display for LinkDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Human-readable semantics of a relationship in each traversal direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkType {
    /// Label read from source to target (e.g., "parent for").
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source_to_target: String,
    /// Label read from target to source (e.g., "subtask of").
    #[serde(default, deserialize_with = "null_as_empty")]
    pub target_to_source: String,
}

impl LinkType {
    pub fn new(source_to_target: impl Into<String>, target_to_source: impl Into<String>) -> Self {
        LinkType {
            source_to_target: source_to_target.into(),
            target_to_source: target_to_source.into(),
        }
    }
}

/// One relationship edge as seen from the issue being inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueLink {
    pub direction: LinkDirection,
    #[serde(rename = "linkType", default)]
    pub link_type: LinkType,
    /// Related issues, in the order the tracker returned them.
    #[serde(rename = "trimmedIssues", default)]
    pub related_issues: Vec<IssueRef>,
}

impl IssueLink {
    pub fn new(direction: LinkDirection, link_type: LinkType, related_issues: Vec<IssueRef>) -> Self {
        IssueLink {
            direction,
            link_type,
            related_issues,
        }
    }
}

// The tracker sends `null` for labels an undirected link type does not define.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
