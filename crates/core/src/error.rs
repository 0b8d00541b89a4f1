// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for pl-core operations.

use thiserror::Error;

/// All possible errors that can occur in pl-core operations.
///
/// The classifiers and the policy are infallible; only parsing user input
/// produces errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid time format: '{0}'\n  hint: use a number with an optional unit, e.g. 30m, 2h, 0.5d")]
    InvalidDurationFormat(String),

    #[error("invalid time value: '{0}'\n  hint: time spent must be a positive number of at least one minute")]
    InvalidDurationValue(String),
}

/// A specialized Result type for pl-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
