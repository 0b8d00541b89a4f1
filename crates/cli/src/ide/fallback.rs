// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fallback used when the IDE daemon cannot perform the checkout.

use crate::error::{Error, Result};

const URI_SCHEME: &str = "idea://open?file=";
const ANCHOR_FILE: &str = "README.md";

/// Build the IDE protocol URI that opens the project's README.
pub fn fallback_uri(project_path: &str) -> String {
    let anchor = format!("{}/{}", project_path.trim_end_matches('/'), ANCHOR_FILE);
    format!("{}{}", URI_SCHEME, urlencoding::encode(&anchor))
}

/// Desktop side effects of the fallback.
pub trait Launcher {
    fn copy_to_clipboard(&self, text: &str) -> Result<()>;
    fn open_uri(&self, uri: &str) -> Result<()>;
}

/// Launcher backed by the system clipboard and URI handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| Error::Clipboard(e.to_string()))
    }

    fn open_uri(&self, uri: &str) -> Result<()> {
        open::that(uri)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "fallback_tests.rs"]
mod tests;
