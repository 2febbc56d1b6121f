//! Destructive housekeeping for a project: build output folders and git-clean.
//!
//! Both operations assume the caller already asked the user for confirmation.
//!
//! - [`clean_build_outputs`] reports real success or failure.
//! - [`clean_vcs_untracked`] is best-effort: files that cannot be deleted are
//!   logged and skipped, and the call still reports success once the repository
//!   could be read. There is no partial-failure reporting.

use crate::core::{error::Result, git::GitRepo, resolver, state::Project};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Folders removed by [`clean_build_outputs`], searched below the project folder.
pub const BUILD_OUTPUT_FOLDERS: [&str; 2] = ["bin", "obj"];

/// Deletes the first `bin` and `obj` folder found below the project's folder.
///
/// Returns `true` when both are absent or were deleted, `false` as soon as one
/// deletion fails.
pub fn clean_build_outputs(project: &Project) -> bool {
    for name in BUILD_OUTPUT_FOLDERS {
        let Some(folder) = resolver::resolve_named_subfolder(&project.path, name) else {
            log::debug!("No '{name}' folder below {}", project.path.display());
            continue;
        };

        if !remove_folder(&folder) {
            return false;
        }
    }

    true
}

fn remove_folder(path: &Path) -> bool {
    match fs::remove_dir_all(path) {
        Ok(()) => {
            log::info!("Deleted folder {}", path.display());
            true
        }
        Err(e) if e.kind() == ErrorKind::NotFound => true,
        Err(e) => {
            log::warn!(
                "An error has occurred while cleaning the folder '{}': {e}",
                path.display()
            );
            false
        }
    }
}

/// Deletes untracked and/or ignored files of the project's repository.
///
/// Without a VCS root there is nothing to do and the call succeeds. Failing to
/// open or read the repository is an error; failing to delete a single file is
/// logged and skipped.
pub fn clean_vcs_untracked(
    project: &Project,
    include_untracked: bool,
    include_ignored: bool,
) -> Result<bool> {
    let root = project
        .vcs_root
        .clone()
        .or_else(|| resolver::resolve_vcs_root(&project.path));

    let Some(root) = root.filter(|r| r.is_dir()) else {
        return Ok(true);
    };
    if !include_untracked && !include_ignored {
        return Ok(true);
    }

    let repo = GitRepo::open(&root)?;
    let workdir = repo.workdir().map(Path::to_path_buf).unwrap_or(root);

    // Untracked folders must be walked too, or ignored files inside them are missed
    let targets: Vec<PathBuf> = repo
        .status_entries(true, include_ignored)?
        .into_iter()
        .filter(|(_, status)| {
            (include_untracked && status.contains(git2::Status::WT_NEW))
                || (include_ignored && status.contains(git2::Status::IGNORED))
        })
        .map(|(path, _)| workdir.join(path))
        .collect();

    let mut deleted = 0usize;
    for file in &targets {
        if !file.is_file() {
            continue;
        }

        match fs::remove_file(file) {
            Ok(()) => deleted += 1,
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => log::warn!("Git-Clean: Can't delete file '{}': {e}", file.display()),
        }
    }

    log::info!(
        "Git-Clean removed {deleted} of {} file(s) in {}",
        targets.len(),
        workdir.display()
    );
    Ok(true)
}
