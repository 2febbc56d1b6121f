//! In-memory list of tracked projects backed by the SQLite store.
//!
//! The catalog owns the [`Project`] records. Every mutation is written to the
//! store; snapshot fields only live in memory and are filled by the refresh path.
//! A path may be tracked only once.

use crate::core::{
    error::{ProjectExplorerError, Result},
    refresh::{resolve_status, ResolvedStatus},
    state::{Project, StatusSnapshot},
    store::{Database, ProjectRow},
};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct ProjectCatalog {
    db: Database,
    projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Loads the persisted projects in insertion order. Status is not read here.
    pub fn open(db: Database) -> Result<Self> {
        let projects = db
            .list_projects()?
            .into_iter()
            .map(|row| Project::with_id(row.id, row.name, row.path))
            .collect::<Vec<_>>();

        log::debug!("Loaded {} project(s) from the catalog", projects.len());
        Ok(Self { db, projects })
    }

    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: i64) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    pub fn require(&self, id: i64) -> Result<&Project> {
        self.get(id)
            .ok_or_else(|| ProjectExplorerError::project_not_found(id))
    }

    /// Projects whose name, path or VCS root contain `term`, ignoring case.
    pub fn filter(&self, term: &str) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.matches(term)).collect()
    }

    /// True if a project other than `id` already uses `path`; `id == 0` means
    /// "a new project" and checks against all of them.
    ///
    /// Both the in-memory paths (which may carry unsaved edits) and the stored
    /// ones are checked.
    pub fn exists_by_path(&self, id: i64, path: &Path) -> Result<bool> {
        let in_memory = self
            .projects
            .iter()
            .any(|p| (id == 0 || p.id != id) && p.path == path);
        if in_memory {
            return Ok(true);
        }

        self.db.project_exists(id, path)
    }

    /// Reads the project's status once, then persists and appends it.
    pub fn add(&mut self, mut project: Project) -> Result<i64> {
        if self.exists_by_path(0, &project.path)? {
            return Err(ProjectExplorerError::duplicate_path(&project.path));
        }

        resolve_status(&project.path)?.apply_to(&mut project);

        project.id = self.db.insert_project(&project.name, &project.path)?;
        log::info!(
            "Added project {} '{}' ({})",
            project.id,
            project.name,
            project.path.display()
        );

        let id = project.id;
        self.projects.push(project);
        Ok(id)
    }

    pub fn remove(&mut self, id: i64) -> Result<Project> {
        let index = self
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ProjectExplorerError::project_not_found(id))?;

        if !self.db.delete_project(id)? {
            return Err(ProjectExplorerError::project_not_found(id));
        }

        let project = self.projects.remove(index);
        log::info!("Removed project {} '{}'", project.id, project.name);
        Ok(project)
    }

    /// Edits name and path in memory after checking path uniqueness. Call
    /// [`ProjectCatalog::save_changes`] to persist.
    ///
    /// A new path drops the resolved folder, VCS root and snapshot; the next
    /// refresh fills them for the new location.
    pub fn update(&mut self, id: i64, name: Option<String>, path: Option<PathBuf>) -> Result<()> {
        if let Some(path) = &path {
            if self.exists_by_path(id, path)? {
                return Err(ProjectExplorerError::duplicate_path(path));
            }
        }

        let project = self
            .get_mut(id)
            .ok_or_else(|| ProjectExplorerError::project_not_found(id))?;
        if let Some(name) = name {
            project.name = name;
        }
        if let Some(path) = path {
            if project.path != path {
                project.path = path;
                project.folder = None;
                project.vcs_root = None;
                project.snapshot = StatusSnapshot::default();
            }
        }

        Ok(())
    }

    /// Flushes the persisted fields of every project to the store.
    pub fn save_changes(&mut self) -> Result<()> {
        let rows: Vec<ProjectRow> = self
            .projects
            .iter()
            .map(|p| ProjectRow {
                id: p.id,
                name: p.name.clone(),
                path: p.path.clone(),
            })
            .collect();

        self.db.update_projects(&rows)
    }

    /// Writes a refresh result into the project. Returns `false` if the project
    /// is no longer tracked.
    pub fn apply(&mut self, id: i64, resolved: ResolvedStatus) -> bool {
        match self.get_mut(id) {
            Some(project) => {
                resolved.apply_to(project);
                true
            }
            None => false,
        }
    }
}
