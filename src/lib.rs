//! Project Explorer - catalog local project folders and keep their git status fresh.
//!
//! This library tracks project descriptor files in a SQLite catalog, locates the
//! repository each one lives in, reads a normalized status snapshot (branch,
//! changed files, last commit) and keeps those snapshots current on a timer. It
//! also offers the housekeeping actions: deleting build output folders and
//! removing untracked or ignored files.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Path resolution and repository status reading
//! - The project catalog and its store
//! - Tolerant / strict bulk refresh and the refresh scheduler
//! - Cleanup, configuration and settings
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    clean_build_outputs,
    clean_vcs_untracked,
    read_status,
    resolve_named_subfolder,
    resolve_status,
    resolve_vcs_root,

    BranchSnapshot,
    ChangedFileEntry,
    CommitSnapshot,
    ConfigKey,
    ConfigManager,
    Database,
    FileStatusCategory,
    GitRepo,
    Project,
    ProjectCatalog,
    // Error handling
    ProjectExplorerError,
    RefreshReport,
    RefreshScheduler,
    Refresher,
    Result,
    SchedulerState,
    SettingsContext,
    SharedCatalog,
    StatusSnapshot,
};
