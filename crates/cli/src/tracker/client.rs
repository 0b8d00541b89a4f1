// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker client for the time-logging workflow.
//!
//! Provides a high-level interface for:
//! - Listing work item types
//! - Looking up an issue's type
//! - Listing an issue's links
//! - Creating work items

use serde::de::DeserializeOwned;
use serde_json::Value;

use pl_core::IssueLink;

use super::transport::{HttpTransport, Method, RelayRequest, Transport};
use super::wire::{IssueDetail, WorkItemRequest, WorkItemType};
use crate::error::{Error, Result};

const WORK_ITEM_TYPES_FIELDS: &str = "id,name";
const ISSUE_DETAIL_FIELDS: &str = "idReadable,summary,customFields(name,value(name))";
const ISSUE_LINKS_FIELDS: &str =
    "id,direction,linkType(sourceToTarget,targetToSource),trimmedIssues(idReadable,summary)";
const TOP_LINKS: u32 = 25;

/// Client for the tracker REST API.
pub struct TrackerClient<T: Transport = HttpTransport> {
    base_url: String,
    token: String,
    transport: T,
}

impl TrackerClient<HttpTransport> {
    /// Create a client with the default HTTP transport.
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        Ok(Self::with_transport(base_url, token, HttpTransport::new()?))
    }
}

impl<T: Transport> TrackerClient<T> {
    /// Create a client with a custom transport (for testing).
    pub fn with_transport(base_url: &str, token: &str, transport: T) -> Self {
        TrackerClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.trim().to_string(),
            transport,
        }
    }

    /// Access the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// List the work item types configured for time tracking.
    pub async fn list_work_item_types(&self) -> Result<Vec<WorkItemType>> {
        let url = format!(
            "{}/api/admin/timeTrackingSettings/workItemTypes?fields={}",
            self.base_url,
            urlencoding::encode(WORK_ITEM_TYPES_FIELDS)
        );
        self.call(self.request(Method::Get, url, None)).await
    }

    /// Fetch the issue's type label, if it has one.
    pub async fn issue_type(&self, issue_id: &str) -> Result<Option<String>> {
        let url = format!(
            "{}/api/issues/{}?fields={}",
            self.base_url,
            urlencoding::encode(issue_id),
            urlencoding::encode(ISSUE_DETAIL_FIELDS)
        );
        let detail: IssueDetail = self.call(self.request(Method::Get, url, None)).await?;
        Ok(detail.type_name())
    }

    /// List the issue's links with their related issues.
    pub async fn issue_links(&self, issue_id: &str) -> Result<Vec<IssueLink>> {
        let url = format!(
            "{}/api/issues/{}/links?fields={}&topLinks={}",
            self.base_url,
            urlencoding::encode(issue_id),
            urlencoding::encode(ISSUE_LINKS_FIELDS),
            TOP_LINKS
        );
        self.call(self.request(Method::Get, url, None)).await
    }

    /// Record spent time on `issue_id`.
    pub async fn create_work_item(&self, issue_id: &str, item: &WorkItemRequest) -> Result<()> {
        let url = format!(
            "{}/api/issues/{}/timeTracking/workItems",
            self.base_url,
            urlencoding::encode(issue_id)
        );
        let body = serde_json::to_value(item)?;
        let _: Value = self.call(self.request(Method::Post, url, Some(body))).await?;
        Ok(())
    }

    fn request(&self, method: Method, url: String, body: Option<Value>) -> RelayRequest {
        let mut headers = vec![
            ("Authorization".to_string(), format!("Bearer {}", self.token)),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        RelayRequest {
            method,
            url,
            headers,
            body,
        }
    }

    async fn call<R: DeserializeOwned>(&self, request: RelayRequest) -> Result<R> {
        let data = self.transport.send(request).await.into_result()?;
        serde_json::from_value(data).map_err(|e| Error::Remote {
            message: format!("unexpected response from tracker: {e}"),
            status: None,
        })
    }
}
