//! Git repository management and setup utilities
//!
//! Provides functions for creating test repositories and project descriptor
//! files in various states.

#![allow(dead_code)]

use project_explorer::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    /// Canonical path of the working tree
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn git(repo_path: &Path, args: &[&str]) -> Result<()> {
    Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;
    Ok(())
}

/// Creates a temporary directory without a repository
pub fn setup_plain_dir() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let path = fs::canonicalize(temp_dir.path())?;
    Ok(TestRepo { temp_dir, path })
}

/// Sets up a fresh git repository on branch `main` with a configured user
pub fn setup_test_repo() -> Result<TestRepo> {
    let repo = setup_plain_dir()?;

    git(&repo.path, &["init"])?;
    git(&repo.path, &["checkout", "-b", "main"])?;
    git(&repo.path, &["config", "user.name", "Test User"])?;
    git(&repo.path, &["config", "user.email", "test@example.com"])?;

    Ok(repo)
}

/// Sets up a git repository with an initial commit containing "initial.txt"
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

/// Creates a file (and its parent folders) with the given content
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let path = repo_path.join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}

pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", filename])
}

pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "-m", message])
}

pub fn git_branch(repo_path: &Path, name: &str) -> Result<()> {
    git(repo_path, &["branch", name])
}

/// Replaces the `.git` folder with an empty one: the root still resolves but
/// the repository can no longer be opened.
pub fn break_repository(repo_path: &Path) -> Result<()> {
    let git_dir = repo_path.join(".git");
    fs::remove_dir_all(&git_dir)?;
    fs::create_dir(&git_dir)?;
    Ok(())
}
