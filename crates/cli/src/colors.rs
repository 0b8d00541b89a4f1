// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help text and command output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes shared by help and command output.
pub mod codes {
    /// Section headers
    pub const HEADER: u8 = 74;
    /// Commands and literals
    pub const LITERAL: u8 = 250;
    /// Placeholders and secondary context
    pub const CONTEXT: u8 = 245;
    /// Successful outcomes
    pub const GOOD: u8 = 114;
    /// Degraded outcomes
    pub const WARN: u8 = 179;

    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Wrap `text` in a 256-color foreground escape, unconditionally.
fn fg256(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{}", codes::RESET)
}

fn paint(code: u8, text: &str) -> String {
    if should_colorize() {
        fg256(code, text)
    } else {
        text.to_string()
    }
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

pub fn good(text: &str) -> String {
    paint(codes::GOOD, text)
}

pub fn warn(text: &str) -> String {
    paint(codes::WARN, text)
}

/// Colorize an examples help block.
///
/// ```text
/// Examples:
///   prlog log 2h PROJ-123          Log two hours on PROJ-123
///   prlog setup endpoint <name>    Point prlog at a tracker
/// ```
///
/// Lines ending in `:` become headers. In example lines the command (up to
/// the first run of two spaces) is a literal, with `<placeholders>` and
/// `"quoted"` arguments dimmed as context; the description is left plain.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    colorize_examples(text)
}

fn colorize_examples(text: &str) -> String {
    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{indent}{}", fg256(codes::HEADER, trimmed));
            }
            match find_description_start(trimmed) {
                Some(end) => format!(
                    "{indent}{}{}",
                    colorize_command(&trimmed[..end]),
                    &trimmed[end..]
                ),
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Colorize a command line word by word, regardless of terminal settings.
pub fn colorize_command(cmd: &str) -> String {
    let mut out = String::with_capacity(cmd.len() + 64);
    let mut rest = cmd;
    while !rest.is_empty() {
        let (token, tail) = next_token(rest);
        if token.starts_with('<') || token.starts_with('"') {
            out.push_str(&fg256(codes::CONTEXT, token));
        } else if token.trim().is_empty() {
            out.push_str(token);
        } else {
            out.push_str(&fg256(codes::LITERAL, token));
        }
        rest = tail;
    }
    out
}

/// Split off the next token: a run of spaces, a `<placeholder>`, a quoted
/// string, or a plain word.
fn next_token(s: &str) -> (&str, &str) {
    let close = match s.as_bytes()[0] {
        b' ' => return s.split_at(s.find(|c| c != ' ').unwrap_or(s.len())),
        b'<' => '>',
        b'"' => '"',
        _ => return s.split_at(s.find(' ').unwrap_or(s.len())),
    };
    let end = s[1..].find(close).map_or(s.len(), |i| i + 2);
    s.split_at(end)
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let start = line.find("  ")?;
    let has_description = !line[start..].trim_start().is_empty();
    (start > 0 && has_description).then_some(start)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
