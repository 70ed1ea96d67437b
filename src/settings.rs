use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

use crate::charts::service::DEFAULT_RANGE_HOURS;

/// Ten years of captures.
pub const MAX_RANGE_HOURS: i64 = 10 * 366 * 24;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// SQLite file the capture pipeline appends to.
    pub database_path: PathBuf,
    pub bind_address: String,
    /// Window used when a request leaves out `start`.
    pub default_range_hours: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("/home/pi/raspilapse/data/timelapse.db"),
            bind_address: "0.0.0.0:5000".into(),
            default_range_hours: DEFAULT_RANGE_HOURS,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. A missing file gives the defaults, and
    /// so does a file that does not parse (with a warning).
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        let mut settings = match serde_json::from_str::<Settings>(&contents) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(
                    "Ignoring invalid settings file {}: {err}",
                    path.display()
                );
                Self::default()
            }
        };

        if !(1..=MAX_RANGE_HOURS).contains(&settings.default_range_hours) {
            warn!(
                "default_range_hours must be between 1 and {}, got {}; using {}",
                MAX_RANGE_HOURS, settings.default_range_hours, DEFAULT_RANGE_HOURS
            );
            settings.default_range_hours = DEFAULT_RANGE_HOURS;
        }

        Ok(settings)
    }
}
