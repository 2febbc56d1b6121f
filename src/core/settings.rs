//! JSON settings file.
//!
//! Holds the lightweight project list (name + path), the configured editor and the
//! time of the last save. There is no process-wide instance: callers load a
//! [`SettingsContext`] at startup, pass it where needed and save it explicitly.

use crate::core::error::{ProjectExplorerError, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SettingsProject {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub projects: Vec<SettingsProject>,
    pub editor_path: Option<PathBuf>,
    pub last_save: Option<DateTime<Local>>,
}

#[derive(Debug)]
pub struct SettingsContext {
    path: PathBuf,
    pub settings: Settings,
}

impl SettingsContext {
    /// Reads the settings file; a missing file yields defaults.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let settings = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| ProjectExplorerError::settings_read_failed(&path, e))?;
            serde_json::from_str(&content)
                .map_err(|e| ProjectExplorerError::settings_parse_failed(&path, e))?
        } else {
            log::debug!("No settings file at {}, using defaults", path.display());
            Settings::default()
        };

        Ok(Self { path, settings })
    }

    /// Stamps `last_save` and writes the whole document.
    pub fn save(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ProjectExplorerError::settings_write_failed(&self.path, e))?;
            }
        }

        self.settings.last_save = Some(Local::now());
        let content = serde_json::to_string_pretty(&self.settings)?;
        std::fs::write(&self.path, content)
            .map_err(|e| ProjectExplorerError::settings_write_failed(&self.path, e))?;

        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
