//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;
use project_explorer::{FileStatusCategory, Project};
use std::path::Path;

/// Creates a predicate that checks for a catalog line of the given project
pub fn has_project_line(id: i64, name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("[{id}] {name}"))
}

/// Creates a predicate that checks for the confirmation error
pub fn requires_confirmation() -> impl Predicate<str> {
    predicates::str::contains("Pass --yes to confirm")
}

/// Creates a predicate that checks for the duplicate path error
pub fn duplicate_path() -> impl Predicate<str> {
    predicates::str::contains("already exists")
}

/// True if the project's snapshot lists `path` under `category`
pub fn has_file(project: &Project, path: &str, category: FileStatusCategory) -> bool {
    project
        .snapshot
        .files
        .iter()
        .any(|f| f.path == Path::new(path) && f.category == category)
}
