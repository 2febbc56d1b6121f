//! Re-reading repository status for cataloged projects.
//!
//! Status is computed without holding the catalog lock and then written back into
//! the project record in one step, so readers never observe a half-written
//! snapshot. Bulk refreshes take the `in_flight` guard for their whole run: a
//! timer tick and a user-triggered reload never interleave, later callers wait.
//!
//! Projects are always refreshed one after another in catalog order.

use crate::core::{
    catalog::ProjectCatalog,
    error::Result,
    git,
    resolver,
    state::{Project, StatusSnapshot},
};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub type SharedCatalog = Arc<Mutex<ProjectCatalog>>;

/// Result of resolving and reading one project, not yet applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStatus {
    pub folder: Option<PathBuf>,
    pub vcs_root: Option<PathBuf>,
    /// `None` when there is no VCS root; the old snapshot is kept then
    pub snapshot: Option<StatusSnapshot>,
}

impl ResolvedStatus {
    pub fn apply_to(self, project: &mut Project) {
        project.folder = self.folder;
        project.vcs_root = self.vcs_root;
        if let Some(snapshot) = self.snapshot {
            project.snapshot = snapshot;
        }
    }
}

/// Locates the VCS root of `descriptor` and, if there is one, reads its status.
pub fn resolve_status(descriptor: &Path) -> Result<ResolvedStatus> {
    let folder = resolver::containing_folder(descriptor);
    let vcs_root = resolver::resolve_vcs_root(descriptor);

    let snapshot = match &vcs_root {
        Some(root) => Some(git::read_status(root)?),
        None => None,
    };

    Ok(ResolvedStatus {
        folder,
        vcs_root,
        snapshot,
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefreshReport {
    /// Projects whose snapshot was replaced
    pub refreshed: usize,
    /// Projects without a VCS root
    pub skipped: usize,
    /// `(project id, error message)` for projects that failed
    pub failed: Vec<(i64, String)>,
    pub finished_at: Option<DateTime<Local>>,
}

impl RefreshReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Refresher {
    catalog: SharedCatalog,
    in_flight: Arc<Mutex<()>>,
}

impl Refresher {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self {
            catalog,
            in_flight: Arc::new(Mutex::new(())),
        }
    }

    pub fn catalog(&self) -> &SharedCatalog {
        &self.catalog
    }

    /// Locks the catalog for reading or editing.
    pub fn lock_catalog(&self) -> MutexGuard<'_, ProjectCatalog> {
        self.catalog.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Refreshes every project; a failing project is logged and left as it was.
    pub fn refresh_all_tolerant(&self) -> RefreshReport {
        let _guard = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        let mut report = RefreshReport::default();

        for (id, path) in self.targets() {
            match self.refresh_target(id, &path) {
                Ok(true) => report.refreshed += 1,
                Ok(false) => report.skipped += 1,
                Err(e) => {
                    log::warn!("Refreshing project {id} ({}) failed: {e}", path.display());
                    report.failed.push((id, e.to_string()));
                }
            }
        }

        report.finished_at = Some(Local::now());
        log::info!(
            "Refreshed {} project(s), {} without repository, {} failed",
            report.refreshed,
            report.skipped,
            report.failed.len()
        );
        report
    }

    /// Refreshes every project, stopping at the first failure.
    pub fn refresh_all_strict(&self) -> Result<RefreshReport> {
        let _guard = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        let mut report = RefreshReport::default();

        for (id, path) in self.targets() {
            if self.refresh_target(id, &path)? {
                report.refreshed += 1;
            } else {
                report.skipped += 1;
            }
        }

        report.finished_at = Some(Local::now());
        Ok(report)
    }

    /// Refreshes a single project. Returns whether it has a VCS root.
    pub fn refresh_one(&self, id: i64) -> Result<bool> {
        let _guard = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        let path = self.lock_catalog().require(id)?.path.clone();
        self.refresh_target(id, &path)
    }

    fn targets(&self) -> Vec<(i64, PathBuf)> {
        self.lock_catalog()
            .list()
            .iter()
            .map(|project| (project.id, project.path.clone()))
            .collect()
    }

    fn refresh_target(&self, id: i64, path: &Path) -> Result<bool> {
        let resolved = resolve_status(path)?;
        let has_root = resolved.vcs_root.is_some();

        if !self.lock_catalog().apply(id, resolved) {
            log::debug!("Project {id} was removed during refresh");
        }

        Ok(has_root)
    }
}
