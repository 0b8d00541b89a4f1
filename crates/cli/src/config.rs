// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User settings.
//!
//! Settings are stored in `settings.toml` inside the prlog config directory
//! (`$PRLOG_CONFIG_DIR`, else `$XDG_CONFIG_HOME/prlog`, else `~/.config/prlog`)
//! and include:
//! - `endpoint`: tracker subdomain (e.g., "acme" for acme.youtrack.cloud) or base URL
//! - `token`: permanent API token sent as a bearer credential
//! - `work_item_type`: preferred work item type for logged time
//! - `ide_daemon_url`: override for the local IDE daemon
//! - `ide_project_paths`: repository name to local checkout path
//!
//! Settings are read once when a command starts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};
use crate::tracker::WorkItemType;

const APP_DIR_NAME: &str = "prlog";
const SETTINGS_FILE_NAME: &str = "settings.toml";
const CLOUD_DOMAIN: &str = "youtrack.cloud";

/// Persisted user settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Tracker subdomain or full base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// API token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Base URL of the local IDE daemon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ide_daemon_url: Option<String>,
    /// Work item type attached to every logged entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_item_type: Option<WorkItemType>,
    /// Local checkout path per repository name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub ide_project_paths: BTreeMap<String, String>,
}

impl Settings {
    /// Loads settings from `dir`. A missing file yields empty settings.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(SETTINGS_FILE_NAME);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
            Err(e) => return Err(Error::Config(format!("failed to read settings: {}", e))),
        };
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse settings: {}", e)))
    }

    /// Saves settings to `dir`, creating it if needed.
    ///
    /// The file holds the API token, so it is made owner-only on Unix.
    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        let path = dir.join(SETTINGS_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize settings: {}", e)))?;
        fs::write(&path, content)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;
        }
        tracing::debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Returns the configured endpoint or a setup instruction.
    pub fn require_endpoint(&self) -> Result<&str> {
        non_blank(self.endpoint.as_deref()).ok_or(Error::ConfigurationMissing {
            what: "tracker endpoint",
            hint: "run 'prlog setup endpoint <subdomain>'",
        })
    }

    /// Returns the configured token or a setup instruction.
    pub fn require_token(&self) -> Result<&str> {
        non_blank(self.token.as_deref()).ok_or(Error::ConfigurationMissing {
            what: "API token",
            hint: "run 'prlog setup token <token>'",
        })
    }

    /// Returns the preferred work item type or a setup instruction.
    pub fn require_work_item_type(&self) -> Result<&WorkItemType> {
        self.work_item_type
            .as_ref()
            .ok_or(Error::ConfigurationMissing {
                what: "work item type",
                hint: "run 'prlog setup type' to pick one",
            })
    }

    /// Returns the tracker base URL derived from the endpoint.
    pub fn tracker_base_url(&self) -> Result<String> {
        Ok(tracker_base_url(self.require_endpoint()?))
    }

    /// Returns the stored checkout path for `repo`.
    pub fn project_path(&self, repo: &str) -> Option<&str> {
        non_blank(self.ide_project_paths.get(repo).map(String::as_str))
    }

    /// Stores the checkout path for `repo`, leaving other repositories untouched.
    pub fn set_project_path(&mut self, repo: &str, path: &str) -> Result<()> {
        let path = path.trim();
        if path.is_empty() {
            return Err(Error::FieldEmpty {
                field: "Project path",
            });
        }
        self.ide_project_paths
            .insert(repo.to_string(), path.to_string());
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Build the tracker base URL from an endpoint setting.
///
/// A bare subdomain maps to the hosted cloud instance; anything that already
/// looks like a URL is used as-is, without a trailing slash.
pub fn tracker_base_url(endpoint: &str) -> String {
    let endpoint = endpoint.trim();
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.trim_end_matches('/').to_string()
    } else {
        format!("https://{}.{}", endpoint, CLOUD_DOMAIN)
    }
}

/// Find the settings directory.
pub fn settings_dir() -> Result<PathBuf> {
    if let Some(dir) = env::config_dir() {
        return Ok(dir);
    }
    if let Some(dir) = env::xdg_config_home() {
        return Ok(dir.join(APP_DIR_NAME));
    }
    dirs::home_dir()
        .map(|home| home.join(".config").join(APP_DIR_NAME))
        .ok_or_else(|| Error::Config("cannot determine home directory".to_string()))
}

/// Load settings from the default directory.
pub fn load() -> Result<(Settings, PathBuf)> {
    let dir = settings_dir()?;
    let settings = Settings::load(&dir)?;
    Ok((settings, dir))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
