use crate::core::error::{ProjectExplorerError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "project-explorer";

pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::config_dir(),
    };

    base.map(|dir| dir.join(APP_DIR))
        .ok_or(ProjectExplorerError::ConfigDirectoryNotFound)
}

pub fn get_data_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_DATA_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".local/share"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::data_dir(),
    };

    base.map(|dir| dir.join(APP_DIR))
        .ok_or(ProjectExplorerError::ConfigDirectoryNotFound)
}

/// Default location of the catalog database.
pub fn default_database_path() -> Result<PathBuf> {
    Ok(get_data_directory()?.join("projects.db"))
}

/// Default location of the JSON settings file.
pub fn default_settings_path() -> Result<PathBuf> {
    Ok(get_config_directory()?.join("settings.json"))
}
