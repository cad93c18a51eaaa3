// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// The name of the application.
pub const APP_NAME: &str = "agenda";

/// Default file name of the event file inside the state directory.
pub const EVENTS_FILE_NAME: &str = "events.json";

/// Configuration for the agenda core.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Directory for storing application state.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// Path to the event file, relative to `state_dir` unless absolute.
    #[serde(default)]
    pub events_file: Option<PathBuf>,

    /// What to do when a new event overlaps an existing one.
    #[serde(default)]
    pub on_conflict: ConflictPolicy,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<()> {
        // Normalize state directory
        match &self.state_dir {
            Some(a) => {
                self.state_dir = Some(expand_path(a).map_err(|e| {
                    Error::Config(format!("failed to expand state directory path: {e}"))
                })?)
            }

            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!(err = %e, "failed to get state directory"),
            },
        };

        // Normalize event file
        if let Some(a) = &self.events_file {
            self.events_file = Some(expand_path(a)?);
        }

        Ok(())
    }

    /// Resolves where events are persisted.
    ///
    /// Without a state directory the file lands in the working directory.
    pub fn events_path(&self) -> PathBuf {
        let file = self
            .events_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(EVENTS_FILE_NAME));

        match &self.state_dir {
            Some(dir) if file.is_relative() => dir.join(file),
            _ => file,
        }
    }
}

/// How a front end reacts to a conflicting new event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Add the event and report the overlap.
    #[default]
    Warn,

    /// Refuse the event unless forced.
    Reject,

    /// Add the event without checking.
    Allow,
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path
        .to_str()
        .ok_or_else(|| Error::Config(format!("invalid path: {}", path.display())))?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| Error::Config("user-specific home directory not found".into()))
}

fn get_config_dir() -> Result<PathBuf> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| Error::Config("user-specific config directory not found".into()))
}

fn get_state_dir() -> Result<PathBuf> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or_else(|| Error::Config("user-specific state directory not found".into()))
}
