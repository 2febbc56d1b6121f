//! Key/value configuration stored in the `Configuration` table.
//!
//! Values are stored as strings and parsed on load; a missing or unparsable value
//! falls back to the caller's default.

use crate::core::error::{ProjectExplorerError, Result};
use crate::core::store::{Database, MAX_CONFIG_VALUE_LEN};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConfigKey {
    /// Path of the primary editor
    EditorPath = 1,
    ColorTheme = 2,
    /// Path of the secondary (lightweight) editor
    SecondaryEditorPath = 3,
    /// git-clean removes untracked files
    GitCleanUntracked = 4,
    /// git-clean removes ignored files
    GitCleanIgnored = 5,
    RefreshIntervalMinutes = 6,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 6] = [
        ConfigKey::EditorPath,
        ConfigKey::ColorTheme,
        ConfigKey::SecondaryEditorPath,
        ConfigKey::GitCleanUntracked,
        ConfigKey::GitCleanIgnored,
        ConfigKey::RefreshIntervalMinutes,
    ];

    pub fn id(self) -> i64 {
        self as i64
    }

    /// kebab-case name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::EditorPath => "editor-path",
            ConfigKey::ColorTheme => "color-theme",
            ConfigKey::SecondaryEditorPath => "secondary-editor-path",
            ConfigKey::GitCleanUntracked => "git-clean-untracked",
            ConfigKey::GitCleanIgnored => "git-clean-ignored",
            ConfigKey::RefreshIntervalMinutes => "refresh-interval",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigKey {
    type Err = ProjectExplorerError;

    fn from_str(s: &str) -> Result<Self> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ProjectExplorerError::unknown_config_key(s))
    }
}

#[derive(Debug)]
pub struct ConfigManager {
    db: Database,
}

impl ConfigManager {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Raw stored value, if any.
    pub fn raw_value(&self, key: ConfigKey) -> Result<Option<String>> {
        self.db.config_value(key.id())
    }

    pub fn load_value<T: FromStr>(&self, key: ConfigKey, default: T) -> T {
        match self.db.config_value(key.id()) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
                log::debug!("Unparsable value '{raw}' for {key}, using default");
                default
            }),
            Ok(None) => default,
            Err(e) => {
                log::warn!("Could not read configuration value {key}: {e}");
                default
            }
        }
    }

    pub fn save_value(&mut self, key: ConfigKey, value: impl fmt::Display) -> Result<()> {
        self.save_values(&[(key, value.to_string())])
    }

    /// Saves several values in one transaction.
    pub fn save_values(&mut self, values: &[(ConfigKey, String)]) -> Result<()> {
        let mut rows = Vec::with_capacity(values.len());
        for (key, value) in values {
            let len = value.chars().count();
            if len > MAX_CONFIG_VALUE_LEN {
                return Err(ProjectExplorerError::config_value_too_long(
                    key.name(),
                    len,
                    MAX_CONFIG_VALUE_LEN,
                ));
            }
            rows.push((key.id(), value.clone()));
        }

        self.db.upsert_config_values(&rows)?;
        log::debug!("Saved {} configuration value(s)", rows.len());
        Ok(())
    }
}
