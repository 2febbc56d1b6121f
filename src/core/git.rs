//! Repository status reading.
//!
//! This module provides a read-only interface to a repository through the [`GitRepo`]
//! struct. It wraps the `git2` library and turns its typed status results into the
//! normalized [`StatusSnapshot`] and [`BranchSnapshot`] values the catalog stores.
//!
//! # Public API
//! - [`GitRepo`]: Main interface for repository reads
//! - [`read_status`]: Open a VCS root and produce a snapshot in one call
//!
//! # Key Features
//! - **Status reading**: git2 status flags split into typed [`FileStatusCategory`] entries
//! - **Summary counters**: added/staged/removed/untracked/modified/missing/ignored
//! - **Last commit**: `"{author} - {timestamp}"` of the newest commit, or `"undefined"`
//! - **Branch listing**: every local and remote branch with its full history
//!
//! Nothing in here writes to the repository.

use crate::core::{
    error::Result,
    file_status::FileStatusCategory,
    state::{
        BranchSnapshot, ChangedFileEntry, CommitSnapshot, StatusCounts, StatusSnapshot,
        TIMESTAMP_FORMAT, UNDEFINED_COMMIT,
    },
};
use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use git2::{BranchType, ErrorCode, Oid, Reference, Repository, Sort, StatusOptions};
use std::path::{Path, PathBuf};

/// Opens the repository at `root` and reads its status snapshot.
pub fn read_status(root: &Path) -> Result<StatusSnapshot> {
    GitRepo::open(root)?.read_status()
}

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Opens the repository whose working tree (or `.git` folder) is `root`.
    ///
    /// Unlike discovery this never searches parent folders; resolving the root is
    /// the resolver's job.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let repo = Repository::open(root.as_ref())?;
        Ok(GitRepo { repo })
    }

    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Friendly name of HEAD: the branch name (also for an unborn branch) or
    /// `"(no branch)"` when detached.
    pub fn current_branch(&self) -> Result<String> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => Ok(head.shorthand().unwrap_or_default().to_string()),
            Ok(_) => Ok("(no branch)".to_string()),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                let head = self.repo.find_reference("HEAD")?;
                Ok(head
                    .symbolic_target()
                    .map(|target| target.trim_start_matches("refs/heads/").to_string())
                    .unwrap_or_default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Raw status entries (path relative to the working tree, git2 flags).
    pub fn status_entries(
        &self,
        include_untracked: bool,
        include_ignored: bool,
    ) -> Result<Vec<(PathBuf, git2::Status)>> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(include_untracked)
            .recurse_untracked_dirs(include_untracked)
            .include_ignored(include_ignored)
            .recurse_ignored_dirs(include_ignored)
            .renames_head_to_index(true);

        let statuses = self.repo.statuses(Some(&mut opts))?;
        let mut entries = Vec::with_capacity(statuses.len());

        for entry in statuses.iter() {
            let path = String::from_utf8_lossy(entry.path_bytes()).into_owned();
            entries.push((PathBuf::from(path), entry.status()));
        }

        Ok(entries)
    }

    pub fn read_status(&self) -> Result<StatusSnapshot> {
        let branch = self.current_branch()?;

        let mut counts = StatusCounts::default();
        let mut files = Vec::new();
        for (path, status) in self.status_entries(true, false)? {
            counts.record(status);
            for category in FileStatusCategory::split(status) {
                files.push(ChangedFileEntry::new(path.clone(), category));
            }
        }

        // Grouped per category, the way the per-category lists are presented
        files.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.path.cmp(&b.path)));

        let last_commit = self.last_commit_summary()?;

        Ok(StatusSnapshot {
            branch,
            files,
            counts,
            last_commit,
            last_check: Some(Local::now()),
        })
    }

    /// `"{author} - {timestamp}"` of the most recent commit reachable from HEAD.
    pub fn last_commit_summary(&self) -> Result<String> {
        if self.repo.is_empty()? {
            return Ok(UNDEFINED_COMMIT.to_string());
        }

        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                return Ok(UNDEFINED_COMMIT.to_string());
            }
            Err(e) => return Err(e.into()),
        };

        let commits = match head.target() {
            Some(oid) => self.walk_commits(oid)?,
            None => Vec::new(),
        };

        Ok(commits
            .first()
            .map(|commit| {
                format!(
                    "{} - {}",
                    commit.author,
                    commit.timestamp.format(TIMESTAMP_FORMAT)
                )
            })
            .unwrap_or_else(|| UNDEFINED_COMMIT.to_string()))
    }

    /// Every local and remote branch with its commits, most recent first.
    pub fn read_branches(&self) -> Result<Vec<BranchSnapshot>> {
        let mut branches = Vec::new();

        for item in self.repo.branches(None)? {
            let (branch, kind) = item?;

            let name = String::from_utf8_lossy(branch.name_bytes()?).into_owned();
            let is_tracking = kind == BranchType::Local && branch.upstream().is_ok();
            let commits = self.branch_commits(branch.get())?;

            branches.push(BranchSnapshot {
                name,
                is_current_head: branch.is_head(),
                is_remote: kind == BranchType::Remote,
                is_tracking,
                commits,
            });
        }

        Ok(branches)
    }

    /// Category of a single file, `NonExistent` when git has never heard of it
    /// and it is not on disk.
    pub fn file_status(&self, relative: &Path) -> Result<FileStatusCategory> {
        match self.repo.status_file(relative) {
            Ok(status) => Ok(FileStatusCategory::split(status)
                .into_iter()
                .next()
                .unwrap_or(FileStatusCategory::Undefined)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(FileStatusCategory::NonExistent),
            Err(e) => Err(e.into()),
        }
    }

    fn branch_commits(&self, reference: &Reference<'_>) -> Result<Vec<CommitSnapshot>> {
        let resolved = reference.resolve()?;
        match resolved.target() {
            Some(oid) => self.walk_commits(oid),
            None => Ok(Vec::new()),
        }
    }

    fn walk_commits(&self, start: Oid) -> Result<Vec<CommitSnapshot>> {
        let mut walk = self.repo.revwalk()?;
        walk.set_sorting(Sort::TIME)?;
        walk.push(start)?;

        let mut commits = Vec::new();
        for oid in walk {
            let commit = self.repo.find_commit(oid?)?;
            let author = commit.author();

            commits.push(CommitSnapshot {
                message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
                author: String::from_utf8_lossy(author.name_bytes()).into_owned(),
                timestamp: to_datetime(author.when()),
            });
        }

        Ok(commits)
    }
}

/// Converts a git timestamp into a date-time carrying the author's own offset.
fn to_datetime(time: git2::Time) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60).unwrap_or_else(|| Utc.fix());
    DateTime::from_timestamp(time.seconds(), 0)
        .unwrap_or_default()
        .with_timezone(&offset)
}
