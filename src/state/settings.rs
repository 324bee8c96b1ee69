//! Application settings
//!
//! Read once at startup from `<config dir>/radiology-report/settings.json`.
//! Every field has a default, so a partial file (or no file) is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::error::{Error, Result};

/// Default length of the simulated analysis
pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 3000;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// How long the fake analysis takes, in milliseconds
    pub processing_delay_ms: u64,
    pub theme: ThemeChoice,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            processing_delay_ms: DEFAULT_PROCESSING_DELAY_MS,
            theme: ThemeChoice::default(),
        }
    }
}

impl Settings {
    /// Load settings from the user's config directory.
    ///
    /// Never fails: a missing file means defaults, a broken one is logged.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                info!("⚙️  Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                warn!("{err}; using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| Error::Settings {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::from_json(&json).map_err(|e| Error::Settings {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Get the path where settings are looked up
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("radiology-report");
        path.push("settings.json");
        Some(path)
    }

    #[cfg(test)]
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }
}
