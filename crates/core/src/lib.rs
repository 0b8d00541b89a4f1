// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pl-core: Shared library for the prlog time tracker
//!
//! This crate holds the I/O-free part of prlog: the issue link model, the
//! classifiers that decide which links are subtasks and which issue types are
//! aggregates, the time-logging policy, and the duration parser. Nothing here
//! talks to the network or the filesystem.

pub mod classify;
pub mod duration;
pub mod error;
pub mod issue;
pub mod policy;
pub mod pr;

pub use classify::{classify_subtask_links, is_aggregate_type};
pub use duration::parse_duration_to_minutes;
pub use error::{Error, Result};
pub use issue::{IssueLink, IssueRef, LinkDirection, LinkType};
pub use policy::{evaluate, LoggingDecision, Outcome, PolicyInput};
