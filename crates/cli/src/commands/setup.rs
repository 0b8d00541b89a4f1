// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `prlog setup`: tracker access and preferences.

use std::io::{self, BufRead};
use std::path::Path;

use crate::cli::{OutputFormat, SetupCommand};
use crate::colors;
use crate::config::{self, tracker_base_url, Settings};
use crate::env;
use crate::error::{Error, Result};
use crate::ide::{resolve_daemon_url, DEFAULT_DAEMON_URL};
use crate::picker::{self, PickItem};
use crate::tracker::{TrackerClient, Transport, WorkItemType};

use super::{block_on, tracker_client};

/// Execute a setup subcommand.
pub fn run(cmd: SetupCommand) -> Result<()> {
    let (mut settings, dir) = config::load()?;
    match cmd {
        SetupCommand::Endpoint { endpoint } => {
            let base_url = set_endpoint(&mut settings, &endpoint)?;
            settings.save(&dir)?;
            println!("Tracker endpoint set to {}", colors::literal(&base_url));
        }
        SetupCommand::Token { token, stdin } => {
            let token = if stdin {
                read_token(io::stdin().lock())?
            } else {
                token.unwrap_or_default()
            };
            set_token(&mut settings, &token)?;
            settings.save(&dir)?;
            println!("API token saved");
        }
        SetupCommand::Type { name } => {
            let client = tracker_client(&settings)?;
            let chosen = match name {
                Some(name) => block_on(fetch_and_choose(&client, &name))??,
                None => {
                    picker::require_terminal("pass the work item type name or ID")?;
                    let types = block_on(client.list_work_item_types())??;
                    pick_type(&types, settings.work_item_type.as_ref())?
                }
            };
            println!("Work item type set to {}", colors::literal(&chosen.name));
            settings.work_item_type = Some(chosen);
            settings.save(&dir)?;
        }
        SetupCommand::IdeDaemon { url } => {
            settings.ide_daemon_url = Some(url.trim().trim_end_matches('/').to_string());
            settings.save(&dir)?;
            println!("IDE daemon URL set to {}", colors::literal(url.trim()));
        }
        SetupCommand::Show { output } => match output.output {
            OutputFormat::Text => print!("{}", render_text(&settings, &dir)),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&render_json(&settings, &dir))?)
            }
        },
    }
    Ok(())
}

/// Store the endpoint and return the tracker base URL it maps to.
pub(crate) fn set_endpoint(settings: &mut Settings, endpoint: &str) -> Result<String> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(Error::FieldEmpty { field: "Endpoint" });
    }
    settings.endpoint = Some(endpoint.to_string());
    Ok(tracker_base_url(endpoint))
}

pub(crate) fn set_token(settings: &mut Settings, token: &str) -> Result<()> {
    let token = token.trim();
    if token.is_empty() {
        return Err(Error::FieldEmpty { field: "Token" });
    }
    settings.token = Some(token.to_string());
    Ok(())
}

/// Read a token from the first non-blank line of `reader`.
pub(crate) fn read_token(reader: impl BufRead) -> Result<String> {
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            return Ok(line.trim().to_string());
        }
    }
    Err(Error::FieldEmpty { field: "Token" })
}

async fn fetch_and_choose<T: Transport>(
    client: &TrackerClient<T>,
    query: &str,
) -> Result<WorkItemType> {
    let types = client.list_work_item_types().await?;
    choose_type(&types, query)
}

/// Find a work item type by ID, or by name ignoring case.
pub(crate) fn choose_type(types: &[WorkItemType], query: &str) -> Result<WorkItemType> {
    let query = query.trim();
    types
        .iter()
        .find(|t| t.id == query)
        .or_else(|| types.iter().find(|t| t.name.eq_ignore_ascii_case(query)))
        .cloned()
        .ok_or_else(|| Error::UnknownWorkItemType {
            name: query.to_string(),
            available: types.iter().map(|t| t.name.clone()).collect(),
        })
}

fn pick_type(types: &[WorkItemType], current: Option<&WorkItemType>) -> Result<WorkItemType> {
    if types.is_empty() {
        return Err(Error::Config(
            "the tracker defines no work item types".to_string(),
        ));
    }
    let items: Vec<PickItem> = types
        .iter()
        .map(|t| {
            let marker = if current.is_some_and(|c| c.id == t.id) {
                "current"
            } else {
                ""
            };
            PickItem::new(t.name.clone(), marker)
        })
        .collect();
    let idx = picker::pick("Select the work item type for logged time:", &items)?;
    types.get(idx).cloned().ok_or(Error::Cancelled)
}

fn daemon_url(settings: &Settings) -> String {
    resolve_daemon_url(env::ide_daemon_url(), settings.ide_daemon_url.as_deref())
}

/// Show enough of a token to recognize it.
pub(crate) fn mask_token(token: &str) -> String {
    let prefix: String = token.chars().take(4).collect();
    if token.chars().count() <= 8 {
        "****".to_string()
    } else {
        format!("{}****", prefix)
    }
}

pub(crate) fn render_text(settings: &Settings, dir: &Path) -> String {
    let unset = colors::context("(not set)");
    let daemon = daemon_url(settings);
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        colors::header("Settings:"),
        dir.display()
    ));
    out.push_str(&format!(
        "  endpoint:        {}\n",
        settings
            .endpoint
            .as_deref()
            .map(|e| format!("{} ({})", e, tracker_base_url(e)))
            .unwrap_or_else(|| unset.clone())
    ));
    out.push_str(&format!(
        "  token:           {}\n",
        settings
            .token
            .as_deref()
            .map(mask_token)
            .unwrap_or_else(|| unset.clone())
    ));
    out.push_str(&format!(
        "  work item type:  {}\n",
        settings
            .work_item_type
            .as_ref()
            .map(|t| format!("{} ({})", t.name, t.id))
            .unwrap_or_else(|| unset.clone())
    ));
    let default_marker = if daemon == DEFAULT_DAEMON_URL {
        colors::context(" (default)")
    } else {
        String::new()
    };
    out.push_str(&format!("  ide daemon:      {}{}\n", daemon, default_marker));
    out.push_str(&format!(
        "  project paths:   {}\n",
        settings.ide_project_paths.len()
    ));
    out
}

pub(crate) fn render_json(settings: &Settings, dir: &Path) -> serde_json::Value {
    serde_json::json!({
        "path": dir.display().to_string(),
        "endpoint": settings.endpoint,
        "base_url": settings.endpoint.as_deref().map(tracker_base_url),
        "token": settings.token.as_deref().map(mask_token),
        "work_item_type": settings.work_item_type,
        "ide_daemon_url": daemon_url(settings),
        "ide_project_paths": settings.ide_project_paths,
    })
}

#[cfg(test)]
#[path = "setup_tests.rs"]
mod tests;
