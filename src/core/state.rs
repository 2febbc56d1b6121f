//! Project records and the status snapshot attached to them.
//!
//! # Public API
//! - [`Project`]: A tracked project with its resolved folders and latest snapshot
//! - [`StatusSnapshot`]: Point-in-time repository status, replaced wholesale on refresh
//! - [`StatusCounts`]: Per-subcategory counters behind the compact summary string
//! - [`ChangedFileEntry`]: A single changed file and its category
//! - [`BranchSnapshot`] / [`CommitSnapshot`]: Branch listing, computed on demand
//!
//! Only `id`, `name` and `path` of a [`Project`] are persisted; everything else is
//! runtime state owned by the catalog and written by the refresh path.

use crate::core::file_status::FileStatusCategory;
use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Placeholder used when a repository has no commits.
pub const UNDEFINED_COMMIT: &str = "undefined";

/// Timestamp layout used for commit and refresh times.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFileEntry {
    /// Path relative to the working tree root
    pub path: PathBuf,
    /// File name component of `path`
    pub name: String,
    pub category: FileStatusCategory,
}

impl ChangedFileEntry {
    pub fn new(path: impl Into<PathBuf>, category: FileStatusCategory) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            path,
            name,
            category,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub added: usize,
    pub staged: usize,
    pub removed: usize,
    pub untracked: usize,
    pub modified: usize,
    pub missing: usize,
    pub ignored: usize,
}

impl StatusCounts {
    /// Counts one status entry into every bucket its flags belong to.
    pub fn record(&mut self, status: git2::Status) {
        if status.contains(git2::Status::INDEX_NEW) {
            self.added += 1;
        }
        if status.intersects(
            git2::Status::INDEX_MODIFIED
                | git2::Status::INDEX_RENAMED
                | git2::Status::INDEX_TYPECHANGE,
        ) {
            self.staged += 1;
        }
        if status.contains(git2::Status::INDEX_DELETED) {
            self.removed += 1;
        }
        if status.contains(git2::Status::WT_NEW) {
            self.untracked += 1;
        }
        if status.intersects(
            git2::Status::WT_MODIFIED | git2::Status::WT_RENAMED | git2::Status::WT_TYPECHANGE,
        ) {
            self.modified += 1;
        }
        if status.contains(git2::Status::WT_DELETED) {
            self.missing += 1;
        }
        if status.contains(git2::Status::IGNORED) {
            self.ignored += 1;
        }
    }

    /// Compact form: `+added ~staged -removed | +untracked ~modified -missing | iignored`
    pub fn summary(&self) -> String {
        format!(
            "+{} ~{} -{} | +{} ~{} -{} | i{}",
            self.added,
            self.staged,
            self.removed,
            self.untracked,
            self.modified,
            self.missing,
            self.ignored
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Friendly name of HEAD
    pub branch: String,
    pub files: Vec<ChangedFileEntry>,
    pub counts: StatusCounts,
    /// `"{author} - {timestamp}"` or [`UNDEFINED_COMMIT`]
    pub last_commit: String,
    /// `None` until the first successful refresh
    pub last_check: Option<DateTime<Local>>,
}

impl StatusSnapshot {
    pub fn has_changes(&self) -> bool {
        !self.files.is_empty()
    }

    pub fn status_text(&self) -> &'static str {
        if self.has_changes() {
            "Has changes"
        } else {
            "No changes since last commit"
        }
    }

    pub fn status_info(&self) -> String {
        self.counts.summary()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSnapshot {
    pub message: String,
    pub author: String,
    pub timestamp: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchSnapshot {
    pub name: String,
    pub is_current_head: bool,
    pub is_remote: bool,
    pub is_tracking: bool,
    /// Most recent first
    pub commits: Vec<CommitSnapshot>,
}

impl BranchSnapshot {
    /// Latest author timestamp among the branch's commits.
    pub fn last_commit(&self) -> Option<DateTime<FixedOffset>> {
        self.commits.iter().map(|c| c.timestamp).max()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Catalog id, `0` while the project is not yet persisted
    pub id: i64,
    pub name: String,
    /// Path of the project descriptor file
    pub path: PathBuf,
    /// Folder containing the descriptor, set on refresh
    pub folder: Option<PathBuf>,
    /// Working tree root, `None` when no `.git` folder was found
    pub vcs_root: Option<PathBuf>,
    pub snapshot: StatusSnapshot,
}

impl Project {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::with_id(0, name, path)
    }

    pub fn with_id(id: i64, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            name: name.into(),
            path: path.into(),
            folder: None,
            vcs_root: None,
            snapshot: StatusSnapshot::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Case-insensitive match on name, path and VCS root.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }

        let needle = term.to_lowercase();
        let contains = |value: &str| value.to_lowercase().contains(&needle);

        contains(&self.name)
            || contains(&self.path.to_string_lossy())
            || self
                .vcs_root
                .as_ref()
                .map(|root| contains(&root.to_string_lossy()))
                .unwrap_or(false)
    }
}
