// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::{IdeCommand, OutputFormat};
use crate::colors;
use crate::config::{self, Settings};
use crate::env;
use crate::error::{Error, Result};
use crate::ide::{resolve_daemon_url, IdeOpener, OpenOutcome};

use super::{block_on, resolve_repo};

/// Execute an ide subcommand.
pub fn run(cmd: IdeCommand) -> Result<()> {
    let (mut settings, dir) = config::load()?;
    match cmd {
        IdeCommand::Open {
            target,
            branch,
            path,
        } => {
            let repo = resolve_repo(&target)?;
            if let Some(path) = path {
                settings.set_project_path(&repo, &path)?;
                settings.save(&dir)?;
            }
            let project_path = project_path_for(&settings, &repo)?.to_string();
            let daemon_url =
                resolve_daemon_url(env::ide_daemon_url(), settings.ide_daemon_url.as_deref());
            let opener = IdeOpener::new(&daemon_url)?;
            let outcome = block_on(opener.open(&project_path, &branch))??;
            print!("{}", render_outcome(&outcome, branch.trim()));
        }
        IdeCommand::Configure { target, path } => {
            let repo = resolve_repo(&target)?;
            settings.set_project_path(&repo, &path)?;
            settings.save(&dir)?;
            println!(
                "Project path for {} set to {}",
                colors::literal(&repo),
                path.trim()
            );
        }
        IdeCommand::Show { output } => match output.output {
            OutputFormat::Text => print!("{}", render_paths(&settings)),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&settings.ide_project_paths)?
            ),
        },
    }
    Ok(())
}

/// Look up the stored checkout path for `repo`.
pub(crate) fn project_path_for<'a>(settings: &'a Settings, repo: &str) -> Result<&'a str> {
    settings
        .project_path(repo)
        .ok_or_else(|| Error::ProjectPathMissing(repo.to_string()))
}

pub(crate) fn render_outcome(outcome: &OpenOutcome, branch: &str) -> String {
    match outcome {
        OpenOutcome::Daemon => format!(
            "{} \"{}\" and opened the IDE\n",
            colors::good("Checked out"),
            branch
        ),
        OpenOutcome::Fallback {
            uri,
            reason,
            branch_copied,
        } => {
            let mut out = format!(
                "{} {}\n",
                colors::warn("IDE daemon unavailable:"),
                reason
            );
            out.push_str(&format!("Opened {}\n", uri));
            if *branch_copied {
                out.push_str(&format!("Branch \"{}\" copied to clipboard\n", branch));
            } else {
                out.push_str(&format!("Branch: {} (copy manually)\n", branch));
            }
            out
        }
    }
}

pub(crate) fn render_paths(settings: &Settings) -> String {
    if settings.ide_project_paths.is_empty() {
        return "No project paths configured.\n".to_string();
    }
    let width = settings
        .ide_project_paths
        .keys()
        .map(String::len)
        .max()
        .unwrap_or(0);
    settings
        .ide_project_paths
        .iter()
        .map(|(repo, path)| format!("{:width$}  {}\n", repo, path, width = width))
        .collect()
}

#[cfg(test)]
#[path = "ide_tests.rs"]
mod tests;
