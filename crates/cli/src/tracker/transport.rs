// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport abstraction for tracker requests.
//!
//! Provides a trait-based relay layer that enables:
//! - Real HTTP requests for production
//! - Mock transports for unit testing

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// HTTP method of a relayed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request forwarded verbatim by the transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl RelayRequest {
    /// Returns the value of the first header named `name` (any case).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Outcome of a relayed request: `{ ok, data?, error?, status? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl RelayResponse {
    pub fn success(data: Value, status: u16) -> Self {
        RelayResponse {
            ok: true,
            data: Some(data),
            error: None,
            status: Some(status),
        }
    }

    pub fn failure(error: impl Into<String>, status: Option<u16>) -> Self {
        RelayResponse {
            ok: false,
            data: None,
            error: Some(error.into()),
            status,
        }
    }

    /// Normalize an HTTP status and body.
    ///
    /// Success bodies are parsed as JSON, falling back to the raw text. Error
    /// messages prefer `error_description`, then `error`, then the raw body,
    /// then `HTTP <status>`.
    pub fn from_http(status: u16, body: &str) -> Self {
        if (200..300).contains(&status) {
            let data = if body.trim().is_empty() {
                Value::Null
            } else {
                serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
            };
            return RelayResponse::success(data, status);
        }

        let from_json = serde_json::from_str::<Value>(body).ok().and_then(|v| {
            ["error_description", "error"]
                .iter()
                .find_map(|key| v.get(key).and_then(Value::as_str).map(str::to_string))
                .filter(|m| !m.is_empty())
        });
        let message = from_json
            .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
            .unwrap_or_else(|| format!("HTTP {}", status));
        RelayResponse::failure(message, Some(status))
    }

    /// Convert into a result, normalizing failures into [`Error::Remote`].
    pub fn into_result(self) -> Result<Value> {
        if self.ok {
            Ok(self.data.unwrap_or(Value::Null))
        } else {
            Err(Error::remote(self.error, self.status))
        }
    }
}

/// Transport trait for relayed requests.
///
/// Implementations never fail: transport problems are reported as a
/// non-ok [`RelayResponse`].
pub trait Transport: Send + Sync {
    fn send(&self, request: RelayRequest) -> Pin<Box<dyn Future<Output = RelayResponse> + Send + '_>>;
}

/// HTTP transport implementation using reqwest.
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Self::build(reqwest::Client::builder())
    }

    /// A transport that gives up quickly when nothing is listening.
    pub fn with_connect_timeout(timeout: Duration) -> Result<Self> {
        Self::build(reqwest::Client::builder().connect_timeout(timeout))
    }

    fn build(builder: reqwest::ClientBuilder) -> Result<Self> {
        let http = builder
            .user_agent(concat!("prlog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::remote(Some(format!("failed to create http client: {e}")), None))?;
        Ok(HttpTransport { http })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: RelayRequest) -> Pin<Box<dyn Future<Output = RelayResponse> + Send + '_>> {
        Box::pin(async move {
            let mut builder = match request.method {
                Method::Get => self.http.get(&request.url),
                Method::Post => self.http.post(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = &request.body {
                builder = builder.body(body.to_string());
            }

            tracing::debug!(method = %request.method, url = %request.url, "http request");
            let response = match builder.send().await {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!(url = %request.url, error = %e, "http request failed");
                    let message = if e.is_timeout() {
                        "Request timeout"
                    } else {
                        "Network error"
                    };
                    return RelayResponse::failure(message, None);
                }
            };

            let status = response.status().as_u16();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(url = %request.url, error = %e, "failed to read response body");
                    String::new()
                }
            };
            tracing::debug!(status, "http response");
            RelayResponse::from_http(status, &body)
        })
    }
}
