use crate::commands::AppContext;
use crate::core::{
    error::{ProjectExplorerError, Result},
    output::print_success,
    state::Project,
};
use std::path::{Path, PathBuf};

pub fn execute_add(ctx: &AppContext, path: PathBuf, name: Option<String>) -> Result<()> {
    let path = existing_descriptor(path)?;
    let name = name.unwrap_or_else(|| default_name(&path));

    let id = ctx.catalog().add(Project::new(name.clone(), path))?;
    print_success(&format!("Added project [{id}] {name}"));
    Ok(())
}

/// Absolute form of an existing descriptor; paths that do not exist are kept as given.
pub fn normalize_path(path: PathBuf) -> PathBuf {
    std::fs::canonicalize(&path).unwrap_or(path)
}

/// Normalized descriptor path, or `FileNotFound` if nothing exists there.
pub fn existing_descriptor(path: PathBuf) -> Result<PathBuf> {
    if !path.is_file() {
        return Err(ProjectExplorerError::file_not_found(path));
    }
    Ok(normalize_path(path))
}

/// File stem of the descriptor, e.g. `Billing` for `Billing.sln`.
pub fn default_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
