//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`ProjectExplorerError`] which covers every failure mode of
//! the catalog, the status reader, the refresh path and the cleanup service. It uses
//! `thiserror` for ergonomic error definitions and offers constructors for the
//! variants that carry context.
//!
//! # Public API
//! - [`ProjectExplorerError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, ProjectExplorerError>`
//!
//! # Error Categories
//! - **Lookup**: Missing projects or files
//! - **Catalog**: Path uniqueness violations, store failures
//! - **Repository**: git2 open/read failures
//! - **Filesystem / settings**: I/O, JSON and settings file errors

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for project-explorer
#[derive(Error, Debug)]
pub enum ProjectExplorerError {
    // Lookup errors
    #[error("Project {id} is not tracked")]
    ProjectNotFound { id: i64 },

    #[error("File does not exist: {path}")]
    FileNotFound { path: PathBuf },

    // Catalog errors
    #[error("A project with the path '{path}' already exists")]
    DuplicatePath { path: PathBuf },

    #[error("Catalog store error: {0}")]
    Store(#[from] rusqlite::Error),

    // Repository errors
    #[error("Repository access error: {0}")]
    RepositoryAccess(#[from] git2::Error),

    #[error("Invalid UTF-8 path: {path}")]
    InvalidUtf8Path { path: PathBuf },

    // Filesystem errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Unknown configuration key: '{key}'")]
    UnknownConfigKey { key: String },

    #[error("Configuration value for {key} is {len} characters long (max {max})")]
    ConfigValueTooLong { key: String, len: usize, max: usize },

    #[error("Refresh interval must be greater than zero")]
    InvalidInterval,

    // Settings file errors
    #[error("Could not find configuration directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read settings file '{path}': {source}")]
    SettingsReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{path}': {source}")]
    SettingsParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write settings file '{path}': {source}")]
    SettingsWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Housekeeping errors
    #[error("Could not delete the build output folders of '{path}'")]
    CleanupFailed { path: PathBuf },

    #[error("'{action}' cannot be undone. Pass --yes to confirm")]
    ConfirmationRequired { action: String },

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using ProjectExplorerError
pub type Result<T> = std::result::Result<T, ProjectExplorerError>;

impl ProjectExplorerError {
    /// Create a project not found error
    pub fn project_not_found(id: i64) -> Self {
        Self::ProjectNotFound { id }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a duplicate path error
    pub fn duplicate_path(path: impl Into<PathBuf>) -> Self {
        Self::DuplicatePath { path: path.into() }
    }

    /// Create an invalid UTF-8 path error
    pub fn invalid_utf8_path(path: impl Into<PathBuf>) -> Self {
        Self::InvalidUtf8Path { path: path.into() }
    }

    pub fn unknown_config_key(key: impl Into<String>) -> Self {
        Self::UnknownConfigKey { key: key.into() }
    }

    pub fn config_value_too_long(key: impl Into<String>, len: usize, max: usize) -> Self {
        Self::ConfigValueTooLong {
            key: key.into(),
            len,
            max,
        }
    }

    pub fn settings_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SettingsReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn settings_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::SettingsParseFailed {
            path: path.into(),
            source,
        }
    }

    pub fn settings_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SettingsWriteFailed {
            path: path.into(),
            source,
        }
    }

    pub fn cleanup_failed(path: impl Into<PathBuf>) -> Self {
        Self::CleanupFailed { path: path.into() }
    }

    pub fn confirmation_required(action: impl Into<String>) -> Self {
        Self::ConfirmationRequired {
            action: action.into(),
        }
    }

    /// True for the "nothing to do" family: missing project, missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ProjectNotFound { .. } | Self::FileNotFound { .. })
    }
}
