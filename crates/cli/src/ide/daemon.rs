// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client for the local IDE daemon.
//!
//! The daemon listens on loopback and checks out a branch in a project,
//! then brings the IDE to the front.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tracker::{HttpTransport, Method, RelayRequest, Transport};

/// Daemon base URL used when neither the environment nor settings override it.
pub const DEFAULT_DAEMON_URL: &str = "http://127.0.0.1:42800";

const CHECKOUT_PATH: &str = "/ide/checkout";
const CONNECT_TIMEOUT: Duration = Duration::from_millis(750);

/// Body of a checkout request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub project_path: String,
    pub branch: String,
}

/// Daemon answer to a checkout request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckoutResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Pick the daemon base URL: environment, then settings, then the default.
pub fn resolve_daemon_url(env: Option<String>, settings: Option<&str>) -> String {
    env.or_else(|| {
        settings
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
    .unwrap_or_else(|| DEFAULT_DAEMON_URL.to_string())
    .trim_end_matches('/')
    .to_string()
}

/// Loopback client for the IDE daemon.
pub struct DaemonClient<T: Transport = HttpTransport> {
    base_url: String,
    transport: T,
}

impl DaemonClient<HttpTransport> {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self::with_transport(
            base_url,
            HttpTransport::with_connect_timeout(CONNECT_TIMEOUT)?,
        ))
    }
}

impl<T: Transport> DaemonClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        DaemonClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the daemon to check out `branch` in `project_path`.
    ///
    /// Fails when the daemon is unreachable, answers non-2xx, or reports
    /// `success: false`.
    pub async fn checkout(&self, project_path: &str, branch: &str) -> Result<()> {
        let body = serde_json::to_value(CheckoutRequest {
            project_path: project_path.to_string(),
            branch: branch.to_string(),
        })?;
        let request = RelayRequest {
            method: Method::Post,
            url: format!("{}{}", self.base_url, CHECKOUT_PATH),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ],
            body: Some(body),
        };

        let data = self.transport.send(request).await.into_result()?;
        let response: CheckoutResponse = serde_json::from_value(data).unwrap_or_default();
        if response.success {
            Ok(())
        } else {
            Err(Error::remote(
                response.error.or_else(|| Some("checkout failed".to_string())),
                None,
            ))
        }
    }
}

#[cfg(test)]
#[path = "daemon_tests.rs"]
mod tests;
