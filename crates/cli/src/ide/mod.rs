// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Open a pull request's branch in a local IDE.
//!
//! The preferred path asks the local IDE daemon to check out the branch.
//! When the daemon is unavailable or refuses, the opener falls back to the
//! IDE's URI handler and leaves the branch name on the clipboard so the
//! checkout can be finished by hand.

mod daemon;
mod fallback;

pub use daemon::{
    resolve_daemon_url, CheckoutRequest, CheckoutResponse, DaemonClient, DEFAULT_DAEMON_URL,
};
pub use fallback::{fallback_uri, Launcher, SystemLauncher};

use crate::error::{Error, Result};
use crate::tracker::{HttpTransport, Transport};

/// How the branch ended up in the IDE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The daemon checked out the branch.
    Daemon,
    /// The IDE was opened through its URI handler.
    Fallback {
        uri: String,
        /// Why the daemon path was abandoned.
        reason: String,
        /// Whether the branch name reached the clipboard.
        branch_copied: bool,
    },
}

/// Daemon-first IDE opener.
pub struct IdeOpener<T: Transport = HttpTransport, L: Launcher = SystemLauncher> {
    daemon: DaemonClient<T>,
    launcher: L,
}

impl IdeOpener {
    pub fn new(daemon_url: &str) -> Result<Self> {
        Ok(IdeOpener {
            daemon: DaemonClient::new(daemon_url)?,
            launcher: SystemLauncher,
        })
    }
}

impl<T: Transport, L: Launcher> IdeOpener<T, L> {
    pub fn with_parts(daemon: DaemonClient<T>, launcher: L) -> Self {
        IdeOpener { daemon, launcher }
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Open `branch` of the project at `project_path`.
    ///
    /// Only a failure to launch the fallback URI is an error.
    pub async fn open(&self, project_path: &str, branch: &str) -> Result<OpenOutcome> {
        let project_path = project_path.trim();
        let branch = branch.trim();
        if project_path.is_empty() {
            return Err(Error::FieldEmpty {
                field: "Project path",
            });
        }
        if branch.is_empty() {
            return Err(Error::FieldEmpty { field: "Branch" });
        }

        let reason = match self.daemon.checkout(project_path, branch).await {
            Ok(()) => {
                tracing::debug!(project_path, branch, "checked out via daemon");
                return Ok(OpenOutcome::Daemon);
            }
            Err(e) => e.to_string(),
        };
        tracing::info!(
            daemon = self.daemon.base_url(),
            reason = %reason,
            "IDE daemon unavailable, using URI handler"
        );

        let branch_copied = match self.launcher.copy_to_clipboard(branch) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "could not copy branch to clipboard");
                false
            }
        };
        let uri = fallback_uri(project_path);
        self.launcher.open_uri(&uri)?;

        Ok(OpenOutcome::Fallback {
            uri,
            reason,
            branch_copied,
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
