// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::OutputFormat;
use crate::colors;
use crate::config;
use crate::error::Result;
use crate::tracker::WorkItemType;

use super::{block_on, tracker_client};

/// List the tracker's work item types, marking the configured one.
pub fn run(output: OutputFormat) -> Result<()> {
    let (settings, _) = config::load()?;
    let client = tracker_client(&settings)?;
    let types = block_on(client.list_work_item_types())??;
    let current = settings.work_item_type.as_ref().map(|t| t.id.as_str());

    match output {
        OutputFormat::Text => print!("{}", render_text(&types, current)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&types)?),
    }
    Ok(())
}

pub(crate) fn render_text(types: &[WorkItemType], current: Option<&str>) -> String {
    if types.is_empty() {
        return "No work item types found.\n".to_string();
    }
    let width = types.iter().map(|t| t.id.len()).max().unwrap_or(0);
    types
        .iter()
        .map(|t| {
            let marker = if current == Some(t.id.as_str()) {
                colors::context(" (selected)")
            } else {
                String::new()
            };
            format!("{:width$}  {}{}\n", t.id, t.name, marker, width = width)
        })
        .collect()
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
