// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` by commands that accept
//! the same inputs.

use clap::Args;

use super::OutputFormat;

/// The issue to work on: an explicit ID, or a PR title containing one.
#[derive(Args, Clone, Debug, Default)]
#[group(required = true, multiple = false)]
pub struct IssueArgs {
    /// Issue ID (e.g., PROJ-123)
    pub issue: Option<String>,

    /// PR title to take the issue ID from
    #[arg(long, short = 't', value_name = "TITLE")]
    pub title: Option<String>,
}

/// Output format selection.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct OutputArgs {
    /// Output format (text, json)
    #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
    pub output: OutputFormat,
}
