// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the prlog library.
///
/// Errors provide user-friendly messages with hints for common issues.
/// Every variant is recoverable: the command reports it and exits non-zero.
#[derive(Debug, Error)]
pub enum Error {
    // Configuration
    #[error("{what} is not configured\n  hint: {hint}")]
    ConfigurationMissing {
        what: &'static str,
        hint: &'static str,
    },

    #[error("config error: {0}")]
    Config(String),

    // Validation
    #[error("invalid time format: '{0}'\n  hint: use a number with an optional unit, e.g. 30m, 2h, 0.5d")]
    InvalidDurationFormat(String),

    #[error("invalid time value: '{0}'\n  hint: time spent must be a positive number of at least one minute")]
    InvalidDurationValue(String),

    #[error("no issue ID found in '{0}'\n  hint: PR titles must contain an ID like PROJ-123")]
    IssueIdNotFound(String),

    #[error("'{id}' is not a subtask of {issue}\n  hint: available subtasks: {}", available.join(", "))]
    UnknownSubtask {
        id: String,
        issue: String,
        available: Vec<String>,
    },

    #[error("unknown work item type: '{name}'\n  hint: available types: {}", available.join(", "))]
    UnknownWorkItemType {
        name: String,
        available: Vec<String>,
    },

    #[error("no repository name in '{0}'\n  hint: pass a URL like https://github.com/owner/repo/pull/1")]
    RepoNotFound(String),

    #[error("no project path configured for '{0}'\n  hint: run 'prlog ide configure {0} <path>' or pass --path")]
    ProjectPathMissing(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    // Policy
    #[error("cannot log time: {reason}\n  hint: {hint}")]
    PolicyBlocked { reason: String, hint: String },

    // Remote
    #[error("request failed: {message}")]
    Remote {
        message: String,
        status: Option<u16>,
    },

    // Interaction
    #[error("operation cancelled")]
    Cancelled,

    #[error("interactive mode requires a terminal (TTY)\n  hint: {0}")]
    TtyRequired(&'static str),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for prlog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a remote failure from an upstream message, with a generic fallback.
    pub fn remote(message: Option<String>, status: Option<u16>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "unknown error".to_string());
        Error::Remote { message, status }
    }
}

impl From<pl_core::Error> for Error {
    fn from(e: pl_core::Error) -> Self {
        match e {
            pl_core::Error::InvalidDurationFormat(s) => Error::InvalidDurationFormat(s),
            pl_core::Error::InvalidDurationValue(s) => Error::InvalidDurationValue(s),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
