// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker JSON payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A time tracking work item type (e.g., "Development", "Review").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItemType {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Issue detail, reduced to what the type lookup needs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct IssueDetail {
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct CustomField {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
}

impl IssueDetail {
    /// Returns the value name of the custom field called "type" (any case).
    pub fn type_name(&self) -> Option<String> {
        self.custom_fields
            .iter()
            .find(|f| {
                f.name
                    .as_deref()
                    .is_some_and(|n| n.eq_ignore_ascii_case("type"))
            })
            .and_then(|f| f.value.as_ref())
            .and_then(|v| v.get("name"))
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// Body of a work item creation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkItemRequest {
    pub duration: DurationValue,
    /// Milliseconds since the Unix epoch.
    pub date: i64,
    #[serde(rename = "type")]
    pub work_item_type: TypeRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "$type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationValue {
    pub minutes: u32,
    #[serde(rename = "$type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeRef {
    pub id: String,
    #[serde(rename = "$type")]
    pub kind: &'static str,
}

impl WorkItemRequest {
    /// Build a work item; a blank comment is omitted.
    pub fn new(minutes: u32, date_millis: i64, work_item_type_id: &str, comment: Option<&str>) -> Self {
        WorkItemRequest {
            duration: DurationValue {
                minutes,
                kind: "DurationValue",
            },
            date: date_millis,
            work_item_type: TypeRef {
                id: work_item_type_id.to_string(),
                kind: "WorkItemType",
            },
            text: comment
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            kind: "IssueWorkItem",
        }
    }
}
