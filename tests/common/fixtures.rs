//! Test data generation utilities and predefined scenarios

#![allow(dead_code)]

use super::repository::*;
use project_explorer::{Database, ProjectCatalog, Refresher, Result};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Descriptor file name used by every scenario
pub const DESCRIPTOR: &str = "app.csproj";

/// Scenario: committed project with a descriptor at `src/app.csproj`
pub fn create_project_repo() -> Result<(TestRepo, PathBuf)> {
    let repo = setup_test_repo()?;

    let descriptor = create_file(&repo.path, &format!("src/{DESCRIPTOR}"), "<Project />\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Add project")?;

    Ok((repo, descriptor))
}

/// Scenario: descriptor in a folder with no repository above it
pub fn create_plain_project() -> Result<(TestRepo, PathBuf)> {
    let dir = setup_plain_dir()?;
    let descriptor = create_file(&dir.path, DESCRIPTOR, "<Project />\n")?;
    Ok((dir, descriptor))
}

pub fn in_memory_catalog() -> Result<ProjectCatalog> {
    ProjectCatalog::open(Database::open_in_memory()?)
}

pub fn shared_refresher(catalog: ProjectCatalog) -> Refresher {
    Refresher::new(Arc::new(Mutex::new(catalog)))
}
