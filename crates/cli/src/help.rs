// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles matching the examples palette.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));

    Styles::styled()
        .header(fg(colors::codes::HEADER))
        .usage(fg(colors::codes::HEADER))
        .literal(fg(colors::codes::LITERAL))
        .placeholder(fg(colors::codes::CONTEXT))
        .valid(fg(colors::codes::CONTEXT))
        .error(fg(colors::codes::WARN))
}

/// Main help template: command groups first, then options.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_time}
  {log}        Log time on the issue named by a PR
  {subtasks}   Show an issue's subtasks and where time would go
  {types}      List work item types

{header_ide}
  {ide}        Open a PR branch in the local IDE

{header_setup}
  {setup}      Configure tracker access and preferences",
        header_time = colors::header("Time Tracking:"),
        header_ide = colors::header("IDE:"),
        header_setup = colors::header("Setup:"),
        log = colors::literal("log"),
        subtasks = colors::literal("subtasks"),
        types = colors::literal("types"),
        ide = colors::literal("ide"),
        setup = colors::literal("setup"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  prlog setup endpoint <subdomain>     Point prlog at your tracker
  prlog setup token <token>            Store an API token
  prlog setup type                     Pick the work item type
  prlog log 90m --title \"<title>\"      Log time from a PR title",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
