// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for time-spent expressions.
//!
//! Accepts a single unsigned decimal with an optional unit letter:
//! `30m`, `2h`, `0.5d`, `1.5 H`, `5`. A missing unit means minutes.
//! A day is an 8-hour workday.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

const MINUTES_PER_HOUR: f64 = 60.0;
const HOURS_PER_DAY: f64 = 8.0;

static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^(\d+(?:\.\d+)?)\s*([mhdMHD])?$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Convert a time expression into a whole number of minutes.
///
/// Rounding happens after unit conversion and resolves ties to even
/// (`2.5m` is 2, `3.5m` is 4).
///
/// # Errors
///
/// Returns [`Error::InvalidDurationFormat`] if the input does not match the
/// grammar (signs, combined units like `1h30m`, and unknown units included),
/// and [`Error::InvalidDurationValue`] if the value is zero, not finite, or
/// rounds to zero minutes.
pub fn parse_duration_to_minutes(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let caps = DURATION_RE
        .captures(trimmed)
        .ok_or_else(|| Error::InvalidDurationFormat(trimmed.to_string()))?;

    let num_str = caps.get(1).map_or("", |m| m.as_str());
    let value: f64 = num_str
        .parse()
        .map_err(|_| Error::InvalidDurationFormat(trimmed.to_string()))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidDurationValue(trimmed.to_string()));
    }

    let unit = caps
        .get(2)
        .map_or('m', |m| m.as_str().chars().next().unwrap_or('m'))
        .to_ascii_lowercase();
    let minutes = match unit {
        'h' => value * MINUTES_PER_HOUR,
        'd' => value * MINUTES_PER_HOUR * HOURS_PER_DAY,
        _ => value,
    };

    let rounded = minutes.round_ties_even();
    if rounded < 1.0 || rounded > f64::from(u32::MAX) {
        return Err(Error::InvalidDurationValue(trimmed.to_string()));
    }
    Ok(rounded as u32)
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
