//! Filesystem lookups that turn a project descriptor path into the folders the
//! rest of the crate works with.
//!
//! Two traversal directions live here and must not be mixed up:
//! - [`resolve_vcs_root`] walks *upward* from the descriptor's folder until a
//!   directory containing a `.git` folder is found.
//! - [`resolve_named_subfolder`] searches *downward*, depth-first, for the first
//!   subfolder with a given name (used for build output folders).
//!
//! Both fail softly: a missing descriptor or an unsuccessful search yields `None`.

use std::fs;
use std::path::{Path, PathBuf};

/// Name of the version-control metadata folder.
pub const VCS_MARKER: &str = ".git";

/// Returns the folder that contains the descriptor file, if the file exists.
pub fn containing_folder(descriptor: &Path) -> Option<PathBuf> {
    if !descriptor.is_file() {
        return None;
    }

    let absolute = fs::canonicalize(descriptor).ok()?;
    absolute.parent().map(Path::to_path_buf)
}

/// Walks up from the descriptor's folder and returns the first ancestor that
/// holds a `.git` directory.
pub fn resolve_vcs_root(descriptor: &Path) -> Option<PathBuf> {
    let start = containing_folder(descriptor)?;

    for dir in start.ancestors() {
        if dir.join(VCS_MARKER).is_dir() {
            log::debug!("Resolved VCS root {} for {}", dir.display(), descriptor.display());
            return Some(dir.to_path_buf());
        }
    }

    log::debug!("No VCS root above {}", descriptor.display());
    None
}

/// Depth-first search below the descriptor's folder for a directory whose name
/// matches `name` (ASCII case-insensitive). Siblings are visited in name order.
pub fn resolve_named_subfolder(descriptor: &Path, name: &str) -> Option<PathBuf> {
    let start = containing_folder(descriptor)?;
    search_subfolder(&start, name)
}

fn search_subfolder(dir: &Path, name: &str) -> Option<PathBuf> {
    let mut children: Vec<PathBuf> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            // file_type() does not follow symlinks, so linked folders are never entered
            .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .map(|entry| entry.path())
            .collect(),
        Err(e) => {
            log::debug!("Skipping unreadable folder {}: {e}", dir.display());
            return None;
        }
    };
    children.sort();

    for child in children {
        let matches = child
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.eq_ignore_ascii_case(name))
            .unwrap_or(false);

        if matches {
            return Some(child);
        }

        if let Some(found) = search_subfolder(&child, name) {
            return Some(found);
        }
    }

    None
}
