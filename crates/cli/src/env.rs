// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

/// Returns the value of `PRLOG_CONFIG_DIR` if set and non-empty.
pub fn config_dir() -> Option<PathBuf> {
    non_empty(vars::PRLOG_CONFIG_DIR).map(PathBuf::from)
}

/// Returns the value of `XDG_CONFIG_HOME` if set and non-empty.
pub fn xdg_config_home() -> Option<PathBuf> {
    non_empty(vars::XDG_CONFIG_HOME).map(PathBuf::from)
}

/// Returns the value of `PRLOG_IDE_DAEMON_URL` if set and non-empty.
pub fn ide_daemon_url() -> Option<String> {
    non_empty(vars::PRLOG_IDE_DAEMON_URL)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
