//! Type-safe file status categories.
//!
//! This module defines [`FileStatusCategory`], the closed set of categories a changed
//! file can be reported under, and the total mapping from `git2::Status` values onto
//! it. git2 reports a bit set per file; [`FileStatusCategory::split`] turns that set
//! into one category per state so that a file staged *and* modified shows up once
//! in each list.
//!
//! # Public API
//! - [`FileStatusCategory`]: Main enumeration for all file status categories
//!
//! # Key Features
//! - **Total mapping**: every `git2::Status` value maps to exactly one category,
//!   anything unmapped becomes [`FileStatusCategory::Undefined`]
//! - **Display formatting**: consistent labels for CLI output

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FileStatusCategory {
    /// New file in the index
    Added,
    /// Modified in the index or the working tree
    Modified,
    /// Deleted from the index or the working tree
    Deleted,
    /// Renamed in the index or the working tree
    Renamed,
    /// File type changed (e.g. file -> symlink)
    TypeChanged,
    /// New in the working tree, not yet added
    Untracked,
    Unreadable,
    Ignored,
    /// Merge conflict
    Conflicted,
    Unmodified,
    /// Unknown to git and absent from disk
    NonExistent,
    Undefined,
}

/// Every single-state flag that [`FileStatusCategory::split`] recognizes.
const KNOWN_FLAGS: [git2::Status; 13] = [
    git2::Status::INDEX_NEW,
    git2::Status::INDEX_MODIFIED,
    git2::Status::INDEX_DELETED,
    git2::Status::INDEX_RENAMED,
    git2::Status::INDEX_TYPECHANGE,
    git2::Status::WT_NEW,
    git2::Status::WT_MODIFIED,
    git2::Status::WT_DELETED,
    git2::Status::WT_TYPECHANGE,
    git2::Status::WT_RENAMED,
    git2::Status::WT_UNREADABLE,
    git2::Status::IGNORED,
    git2::Status::CONFLICTED,
];

impl FileStatusCategory {
    /// Maps one status value onto its category.
    ///
    /// Only single-state values have a dedicated category; combined bit sets fall
    /// back to [`FileStatusCategory::Undefined`]. Use [`FileStatusCategory::split`]
    /// for combined values.
    pub fn from_git2(status: git2::Status) -> FileStatusCategory {
        if status.is_empty() {
            return FileStatusCategory::Unmodified;
        }

        if status == git2::Status::INDEX_NEW {
            FileStatusCategory::Added
        } else if status == git2::Status::INDEX_MODIFIED || status == git2::Status::WT_MODIFIED {
            FileStatusCategory::Modified
        } else if status == git2::Status::INDEX_DELETED || status == git2::Status::WT_DELETED {
            FileStatusCategory::Deleted
        } else if status == git2::Status::INDEX_RENAMED || status == git2::Status::WT_RENAMED {
            FileStatusCategory::Renamed
        } else if status == git2::Status::INDEX_TYPECHANGE
            || status == git2::Status::WT_TYPECHANGE
        {
            FileStatusCategory::TypeChanged
        } else if status == git2::Status::WT_NEW {
            FileStatusCategory::Untracked
        } else if status == git2::Status::WT_UNREADABLE {
            FileStatusCategory::Unreadable
        } else if status == git2::Status::IGNORED {
            FileStatusCategory::Ignored
        } else if status == git2::Status::CONFLICTED {
            FileStatusCategory::Conflicted
        } else {
            FileStatusCategory::Undefined
        }
    }

    /// Splits a bit set into one category per contained state.
    ///
    /// Conflicted entries are reported only as conflicts. Bits outside the known
    /// set produce a single `Undefined` entry; an empty set is `Unmodified`.
    pub fn split(status: git2::Status) -> Vec<FileStatusCategory> {
        if status.is_empty() {
            return vec![FileStatusCategory::Unmodified];
        }
        if status.contains(git2::Status::CONFLICTED) {
            return vec![FileStatusCategory::Conflicted];
        }

        let mut categories: Vec<FileStatusCategory> = KNOWN_FLAGS
            .iter()
            .filter(|flag| status.contains(**flag))
            .map(|flag| FileStatusCategory::from_git2(*flag))
            .collect();

        let known = KNOWN_FLAGS
            .iter()
            .fold(git2::Status::empty(), |acc, flag| acc | *flag);
        if !status.difference(known).is_empty() {
            categories.push(FileStatusCategory::Undefined);
        }

        categories
    }

    /// Human-readable label
    pub fn description(&self) -> &'static str {
        match self {
            FileStatusCategory::Added => "Added",
            FileStatusCategory::Modified => "Modified",
            FileStatusCategory::Deleted => "Deleted",
            FileStatusCategory::Renamed => "Renamed",
            FileStatusCategory::TypeChanged => "Type changed",
            FileStatusCategory::Untracked => "New file (not yet added)",
            FileStatusCategory::Unreadable => "Unreadable",
            FileStatusCategory::Ignored => "Ignored",
            FileStatusCategory::Conflicted => "Conflict",
            FileStatusCategory::Unmodified => "Unmodified",
            FileStatusCategory::NonExistent => "Non existent",
            FileStatusCategory::Undefined => "undefined",
        }
    }
}

impl fmt::Display for FileStatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
