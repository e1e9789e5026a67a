//! Clock configuration loading.
//!
//! The expected YAML structure is:
//! ```yaml
//! storage_dir: "/var/lib/eventclock"
//! active_window:
//!   duration_secs: 900     # or `single`, or `duration` for 15 minutes
//! upcoming_rows: 8
//! ```
//!
//! Every field is optional; missing values fall back to
//! [`ClockConfig::default`].

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::timeline::{ActiveWindow, DEFAULT_EVENT_DURATION_SECS};

// ── Private YAML deserialization types ────────────────────────────────────────

/// Maps directly onto the YAML file layout.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClockConfigFile {
    storage_dir: Option<PathBuf>,
    active_window: Option<ActiveWindowEntry>,
    upcoming_rows: Option<usize>,
}

/// `active_window` is either a mode name or a duration map.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ActiveWindowEntry {
    Named(String),
    Duration { duration_secs: u32 },
}

impl ActiveWindowEntry {
    fn into_window(self) -> Result<ActiveWindow> {
        match self {
            ActiveWindowEntry::Named(name) => match name.as_str() {
                "single" => Ok(ActiveWindow::Single),
                "duration" => Ok(ActiveWindow::Duration {
                    secs: DEFAULT_EVENT_DURATION_SECS,
                }),
                _ => bail!(
                    "unknown active_window '{name}' (valid: single, duration, {{ duration_secs: N }})"
                ),
            },
            ActiveWindowEntry::Duration { duration_secs } => Ok(ActiveWindow::Duration {
                secs: duration_secs,
            }),
        }
    }
}

// ── Public configuration ──────────────────────────────────────────────────────

/// Host configuration for the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockConfig {
    /// Directory holding the persisted records.
    pub storage_dir: PathBuf,
    /// How active events are counted.
    pub active_window: ActiveWindow,
    /// Upcoming rows the host prints each tick.
    pub upcoming_rows: usize,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("./eventclock-data"),
            active_window: ActiveWindow::Single,
            upcoming_rows: 8,
        }
    }
}

impl ClockConfig {
    /// Parses `path`, filling absent fields with defaults.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, the YAML is structurally
    /// invalid, or `active_window` names an unknown mode.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading clock configuration from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open configuration file: {}", path.display()))?;

        // An empty document deserializes as unit, not as a map
        let file: ClockConfigFile = if content.trim().is_empty() {
            ClockConfigFile::default()
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML file: {}", path.display()))?
        };

        let defaults = Self::default();
        let active_window = match file.active_window {
            Some(entry) => entry
                .into_window()
                .with_context(|| format!("Invalid active_window in {}", path.display()))?,
            None => defaults.active_window,
        };

        let config = Self {
            storage_dir: file.storage_dir.unwrap_or(defaults.storage_dir),
            active_window,
            upcoming_rows: file.upcoming_rows.unwrap_or(defaults.upcoming_rows),
        };

        debug!(
            storage_dir = %config.storage_dir.display(),
            active_window = ?config.active_window,
            upcoming_rows = config.upcoming_rows,
            "Clock configuration"
        );

        Ok(config)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
