// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! prlog - log time on the tracker issue behind a pull request.
//!
//! This crate provides the I/O half of the `prlog` CLI: the tracker client,
//! the settings file, the per-invocation logging session, and the IDE opener.
//! The decision logic (link classification, issue type, policy, duration
//! parsing) lives in `pl-core`.
//!
//! # Main Components
//!
//! - [`tracker::TrackerClient`] - work item types, issue type, links, work item creation
//! - [`session::LogSession`] - fetched issue data plus the current subtask choice
//! - [`config::Settings`] - endpoint, token, work item type, IDE paths
//! - [`ide::IdeOpener`] - daemon checkout with a URI-handler fallback
//! - [`Error`] - Error types for all operations
//!
//! # Logging time
//!
//! ```rust,ignore
//! use prlog::{config, session::LogSession, tracker::{TrackerClient, WorkItemRequest}};
//!
//! let (settings, _) = config::load()?;
//! let client = TrackerClient::new(&settings.tracker_base_url()?, settings.require_token()?)?;
//! let mut session = LogSession::load(&client, "STORY-50").await;
//! session.select_subtask("TASK-51")?;
//! let (target, item) = session.work_item(90, settings.require_work_item_type()?, None, chrono::Utc::now())?;
//! client.create_work_item(&target, &item).await?;
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod env;
pub mod help;
pub mod logging;
mod picker;

pub mod config;
pub mod error;
pub mod ide;
pub mod session;
pub mod tracker;

pub use cli::{Cli, Command, IdeCommand, IssueArgs, OutputArgs, OutputFormat, SetupCommand};
pub use config::Settings;
pub use error::{Error, Result};

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Log {
            duration,
            issue,
            subtask,
            comment,
            dry_run,
        } => commands::log::run(duration, issue, subtask, comment, dry_run),
        Command::Subtasks { issue, output } => commands::subtasks::run(issue, output.output),
        Command::Types { output } => commands::types::run(output.output),
        Command::Ide(cmd) => commands::ide::run(cmd),
        Command::Setup(cmd) => commands::setup::run(cmd),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
