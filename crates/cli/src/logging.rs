// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

use crate::env::vars;

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Filter used with `--verbose`.
const VERBOSE_FILTER: &str = "warn,prlog=debug,pl_core=debug";

/// Pick the log filter: `--verbose` wins, then `RUST_LOG`, then warnings only.
pub(crate) fn build_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_FILTER);
    }
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let rust_log = std::env::var(vars::RUST_LOG).ok();
    let filter = build_filter(verbose, rust_log.as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
