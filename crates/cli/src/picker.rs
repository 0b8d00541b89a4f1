// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Inline terminal picker.
//!
//! Used to choose a subtask when the policy requires one, and to choose the
//! preferred work item type during setup.

use std::io::{self, IsTerminal, Write};

use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    style::{Print, Stylize},
    terminal, ExecutableCommand, QueueableCommand,
};

use crate::error::{Error, Result};

/// One selectable row: a label and an optional description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickItem {
    pub label: String,
    pub detail: String,
}

impl PickItem {
    pub fn new(label: impl Into<String>, detail: impl Into<String>) -> Self {
        PickItem {
            label: label.into(),
            detail: detail.into(),
        }
    }
}

/// Effect of a key press on the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Move(usize),
    Choose(usize),
    Cancel,
    Ignore,
}

/// Returns true if stdin and stdout are both attached to a terminal.
pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

/// Fails with [`Error::TtyRequired`] unless running on a terminal.
pub fn require_terminal(hint: &'static str) -> Result<()> {
    if is_interactive() {
        Ok(())
    } else {
        Err(Error::TtyRequired(hint))
    }
}

pub(crate) fn handle_key(key: KeyEvent, selected: usize, len: usize) -> Step {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Step::Move((selected + len - 1) % len),
        KeyCode::Down | KeyCode::Char('j') => Step::Move((selected + 1) % len),
        KeyCode::Enter => Step::Choose(selected),
        KeyCode::Char('q') | KeyCode::Esc => Step::Cancel,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Step::Cancel,
        _ => Step::Ignore,
    }
}

fn draw(stdout: &mut io::Stdout, prompt: &str, items: &[PickItem], selected: usize) -> io::Result<()> {
    stdout.queue(Print(format!("{}\r\n", prompt)))?;

    for (i, item) in items.iter().enumerate() {
        let marker = if i == selected { "●" } else { "○" };
        let line = if item.detail.is_empty() {
            format!("  {} {}\r\n", marker, item.label)
        } else {
            format!("  {} {} - {}\r\n", marker, item.label, item.detail)
        };
        if i == selected {
            stdout.queue(Print(line.bold()))?;
        } else {
            stdout.queue(Print(line))?;
        }
    }

    stdout.queue(Print("\r\n"))?;
    stdout.queue(Print("↑/↓: Navigate  Enter: Select  q: Cancel".dark_grey()))?;
    stdout.flush()
}

fn restore(stdout: &mut io::Stdout) {
    let _ = stdout.execute(cursor::Show);
    let _ = terminal::disable_raw_mode();
}

/// Run the picker and return the index of the chosen item.
///
/// Returns [`Error::Cancelled`] on q, Esc or Ctrl-C.
pub fn pick(prompt: &str, items: &[PickItem]) -> Result<usize> {
    if items.is_empty() {
        return Err(Error::Cancelled);
    }
    let mut stdout = io::stdout();
    let mut selected: usize = 0;

    terminal::enable_raw_mode()?;
    let _ = stdout.execute(cursor::Hide);

    if let Err(e) = draw(&mut stdout, prompt, items, selected) {
        restore(&mut stdout);
        return Err(Error::Io(e));
    }

    // Prompt and items end in newlines, plus the blank line above the hint.
    let drawn_lines = u16::try_from(items.len() + 2).unwrap_or(u16::MAX);

    let result = loop {
        let evt = match event::read() {
            Ok(e) => e,
            Err(e) => {
                restore(&mut stdout);
                return Err(Error::Io(e));
            }
        };

        if let event::Event::Key(key) = evt {
            match handle_key(key, selected, items.len()) {
                Step::Move(next) => selected = next,
                Step::Choose(idx) => break Some(idx),
                Step::Cancel => break None,
                Step::Ignore => continue,
            }

            let _ = stdout.execute(cursor::MoveUp(drawn_lines));
            let _ = stdout.execute(cursor::MoveToColumn(0));
            let _ = stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown));
            let _ = draw(&mut stdout, prompt, items, selected);
        }
    };

    let _ = stdout.execute(cursor::MoveUp(drawn_lines));
    let _ = stdout.execute(cursor::MoveToColumn(0));
    let _ = stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown));
    restore(&mut stdout);

    result.ok_or(Error::Cancelled)
}

#[cfg(test)]
#[path = "picker_tests.rs"]
mod tests;
