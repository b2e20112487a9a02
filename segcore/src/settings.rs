//! Display preferences
//!
//! Only how the calculator looks is remembered between runs. Operands and
//! results always start empty.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::theme::Palette;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub palette: Palette,
    /// Draw unlit segments faintly, like a real LCD.
    pub show_segment_ghosts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            palette: Palette::Classic,
            show_segment_ghosts: false,
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        config_dir("segcalc").join("settings.json")
    }

    pub fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Read settings, falling back to defaults when the file is missing or
    /// unreadable.
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable settings");
                Self::default()
            }
        }
    }

    /// Write settings, logging instead of failing.
    pub fn save(&self, path: &Path) {
        match self.write(path) {
            Ok(()) => info!(path = %path.display(), "settings saved"),
            Err(e) => warn!(path = %path.display(), error = %e, "could not save settings"),
        }
    }
}

/// Per-user configuration directory for an application.
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("", "", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
