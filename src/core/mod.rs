//! Core functionality for project-explorer.
//!
//! This module provides the building blocks behind the CLI: path resolution,
//! repository status reading, the project catalog, background refresh,
//! cleanup, configuration and output formatting.

pub mod catalog;
pub mod cleanup;
pub mod config;
pub mod dirs;
pub mod error;
pub mod file_status;
pub mod git;
pub mod output;
pub mod refresh;
pub mod resolver;
pub mod scheduler;
pub mod settings;
pub mod state;
pub mod store;

// === Error handling ===
pub use error::{ProjectExplorerError, Result};

// === Path resolution ===
// Upward VCS-root walk and downward named-folder search
pub use resolver::{containing_folder, resolve_named_subfolder, resolve_vcs_root};

// === Repository status ===
pub use file_status::FileStatusCategory;
pub use git::{read_status, GitRepo};

// === Project records ===
pub use state::{
    BranchSnapshot, ChangedFileEntry, CommitSnapshot, Project, StatusCounts, StatusSnapshot,
};

// === Catalog and persistence ===
pub use catalog::ProjectCatalog;
pub use store::Database;

// === Refresh ===
pub use refresh::{resolve_status, RefreshReport, Refresher, ResolvedStatus, SharedCatalog};
pub use scheduler::{RefreshListener, RefreshScheduler, SchedulerState};

// === Cleanup ===
pub use cleanup::{clean_build_outputs, clean_vcs_untracked};

// === Configuration ===
pub use config::{ConfigKey, ConfigManager};
pub use settings::{Settings, SettingsContext, SettingsProject};

// === Output formatting ===
pub use output::{print_error, print_info, print_section_header, print_success};
