// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};

pub use args::{IssueArgs, OutputArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "prlog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Log time on the tracker issue behind a pull request, and open its branch in your IDE")]
#[command(
    long_about = "Log time on the tracker issue behind a pull request, and open its branch in your IDE.\n\n\
    Story issues cannot take time directly: prlog finds their subtasks and asks which one \
    should receive the time."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Print debug logs to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Time tracking
    // ─────────────────────────────────────────────────────────────────────────
    /// Log time on the issue named by a PR
    #[command(after_help = colors::examples("\
Examples:
  prlog log 2h PROJ-123                          Log two hours on PROJ-123
  prlog log 45m --title \"PROJ-7 Fix login\"       Take the issue from a PR title
  prlog log 1.5h STORY-50 --subtask TASK-51      Log on a story's subtask
  prlog log 1d PROJ-9 -c \"Pairing\"               Attach a comment
  prlog log 30m PROJ-9 --dry-run                 Show what would be sent

Durations:
  Format: <number>[m|h|d], e.g. 30m, 1.5h, 0.5d (a day is 8h)"))]
    Log {
        /// Time spent (e.g., 30m, 2h, 0.5d; minutes when no unit)
        #[arg(value_parser = non_empty_string, allow_hyphen_values = true)]
        duration: String,

        #[command(flatten)]
        issue: IssueArgs,

        /// Subtask that receives the time
        #[arg(long, short = 's', value_name = "ID")]
        subtask: Option<String>,

        /// Comment attached to the work item
        #[arg(long, short = 'c', value_name = "TEXT")]
        comment: Option<String>,

        /// Show the resolved target and payload without submitting
        #[arg(long)]
        dry_run: bool,
    },

    /// Show an issue's subtasks and where time would go
    #[command(after_help = colors::examples("\
Examples:
  prlog subtasks STORY-50                       List subtasks of STORY-50
  prlog subtasks --title \"STORY-50 Checkout\"    Take the issue from a PR title
  prlog subtasks STORY-50 -o json               Output as JSON"))]
    Subtasks {
        #[command(flatten)]
        issue: IssueArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List work item types
    Types {
        #[command(flatten)]
        output: OutputArgs,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // IDE
    // ─────────────────────────────────────────────────────────────────────────
    /// Open a PR branch in the local IDE
    #[command(subcommand)]
    Ide(IdeCommand),

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Configure tracker access and preferences
    #[command(subcommand)]
    Setup(SetupCommand),
}

#[derive(Subcommand)]
pub enum SetupCommand {
    /// Set the tracker subdomain or base URL
    #[command(after_help = colors::examples("\
Examples:
  prlog setup endpoint acme                          Use https://acme.youtrack.cloud
  prlog setup endpoint https://yt.example.com/       Use a self-hosted instance"))]
    Endpoint {
        /// Subdomain (e.g., acme) or full URL
        #[arg(value_parser = non_empty_string)]
        endpoint: String,
    },

    /// Store the API token
    #[command(after_help = colors::examples("\
Examples:
  prlog setup token perm:abc123                Store a token
  pass show yt | prlog setup token --stdin     Read the token from stdin"))]
    Token {
        /// Permanent API token
        #[arg(required_unless_present = "stdin", value_parser = non_empty_string)]
        token: Option<String>,

        /// Read the token from stdin
        #[arg(long, conflicts_with = "token")]
        stdin: bool,
    },

    /// Pick the work item type attached to logged time
    #[command(after_help = colors::examples("\
Examples:
  prlog setup type                  Choose interactively
  prlog setup type Development      Choose by name
  prlog setup type 61-0             Choose by ID"))]
    Type {
        /// Work item type name or ID (interactive picker when omitted)
        name: Option<String>,
    },

    /// Set the local IDE daemon URL
    IdeDaemon {
        /// Base URL (e.g., http://127.0.0.1:42800)
        #[arg(value_parser = non_empty_string)]
        url: String,
    },

    /// Show current settings
    Show {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Subcommand)]
pub enum IdeCommand {
    /// Check out a branch in the IDE (falls back to the IDE URI handler)
    #[command(after_help = colors::examples("\
Examples:
  prlog ide open web feature/login                                   Open by repository name
  prlog ide open https://github.com/acme/web/pull/7 feature/login    Open from a PR URL
  prlog ide open web main --path ~/code/web                          Store the path, then open"))]
    Open {
        /// Repository name or PR URL
        #[arg(value_parser = non_empty_string)]
        target: String,

        /// Branch to check out
        #[arg(value_parser = non_empty_string)]
        branch: String,

        /// Local checkout path (stored for the repository)
        #[arg(long, short = 'p')]
        path: Option<String>,
    },

    /// Store the local checkout path for a repository
    Configure {
        /// Repository name or PR URL
        #[arg(value_parser = non_empty_string)]
        target: String,

        /// Absolute path to the local checkout
        path: String,
    },

    /// Show stored checkout paths
    Show {
        #[command(flatten)]
        output: OutputArgs,
    },
}
