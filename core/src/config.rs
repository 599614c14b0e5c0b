// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::report::{ReportOptions, TotalsStyle};

/// The name of the application.
pub const APP_NAME: &str = "daysuntil";

/// Event list read when no source is given, looked up next to the executable.
pub const DEFAULT_EVENTS_FILE: &str = "events.txt";

/// Configuration for the application.
///
/// Every key is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event list read when no source is given on the command line.
    pub events_file: Option<PathBuf>,

    /// Hide events more than this many days away, 0 for no limit.
    pub max_delta: u64,

    /// Hide events fewer than this many days away.
    pub min_delta: u64,

    /// Print future events first, each list in reverse order.
    pub reverse: bool,

    /// Group thousands with commas.
    pub commas: bool,

    /// Totals printed after the events.
    pub totals_style: TotalsStyle,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        if let Some(path) = &self.events_file {
            self.events_file = Some(
                expand_path(path).map_err(|e| format!("Failed to expand events file path: {e}"))?,
            );
        }
        Ok(())
    }

    /// Report options seeded from the configuration.
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            max_delta: self.max_delta,
            min_delta: self.min_delta,
            reverse: self.reverse,
            commas: self.commas,
            totals_style: self.totals_style,
            ..Default::default()
        }
    }

    /// The event list to read when none is given.
    pub fn events_file(&self) -> Result<PathBuf, Box<dyn Error>> {
        match &self.events_file {
            Some(path) => Ok(path.clone()),
            None => default_events_file(),
        }
    }
}

/// `events.txt` in the directory of the running executable.
pub fn default_events_file() -> Result<PathBuf, Box<dyn Error>> {
    let exe = std::env::current_exe()
        .map_err(|e| format!("Failed to locate the running executable: {e}"))?;
    let dir = exe
        .parent()
        .ok_or("The running executable has no parent directory")?;
    Ok(dir.join(DEFAULT_EVENTS_FILE))
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

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

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or("User-specific home directory not found".into())
}

/// The user configuration directory, `$XDG_CONFIG_HOME` on Unix.
pub fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or("User-specific config directory not found".into())
}
