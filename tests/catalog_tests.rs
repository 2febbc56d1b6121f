use project_explorer::{Database, Project, ProjectCatalog, ProjectExplorerError};
use std::path::Path;

mod common;
use common::{fixtures::*, repository::*};

#[cfg(test)]
mod catalog_tests {
    use super::*;

    #[test]
    fn test_add_reads_status_once() -> anyhow::Result<()> {
        let (repo, descriptor) = create_project_repo()?;
        let mut catalog = in_memory_catalog()?;

        let id = catalog.add(Project::new("App", &descriptor))?;
        let project = catalog.require(id)?;

        assert_eq!(project.vcs_root.as_deref(), Some(repo.path()));
        assert_eq!(project.folder.as_deref(), Some(repo.path().join("src").as_path()));
        assert_eq!(project.snapshot.branch, "main");
        assert!(project.snapshot.last_commit.starts_with("Test User - "));
        assert!(project.snapshot.last_check.is_some());
        assert!(!project.snapshot.has_changes());

        Ok(())
    }

    #[test]
    fn test_add_keeps_append_order() -> anyhow::Result<()> {
        let (_a, first) = create_plain_project()?;
        let (_b, second) = create_plain_project()?;
        let mut catalog = in_memory_catalog()?;

        let b = catalog.add(Project::new("Second", &second))?;
        let a = catalog.add(Project::new("First", &first))?;

        let ids: Vec<_> = catalog.list().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![b, a]);
        assert_eq!(catalog.list().iter().filter(|p| p.id == a).count(), 1);

        Ok(())
    }

    #[test]
    fn test_add_duplicate_path() -> anyhow::Result<()> {
        let (_dir, descriptor) = create_plain_project()?;
        let mut catalog = in_memory_catalog()?;
        catalog.add(Project::new("App", &descriptor))?;

        let err = catalog.add(Project::new("Other", &descriptor)).unwrap_err();
        assert!(matches!(err, ProjectExplorerError::DuplicatePath { .. }));
        assert_eq!(catalog.len(), 1);

        Ok(())
    }

    #[test]
    fn test_add_fails_when_repository_is_unreadable() -> anyhow::Result<()> {
        let (repo, descriptor) = create_project_repo()?;
        break_repository(repo.path())?;
        let mut catalog = in_memory_catalog()?;

        let err = catalog.add(Project::new("Broken", &descriptor)).unwrap_err();
        assert!(matches!(err, ProjectExplorerError::RepositoryAccess(_)));
        assert!(catalog.is_empty());
        assert!(!catalog.exists_by_path(0, &descriptor)?);

        Ok(())
    }

    #[test]
    fn test_exists_by_path_ignores_self() -> anyhow::Result<()> {
        let mut catalog = in_memory_catalog()?;
        let a = catalog.add(Project::new("A", "/nowhere/a.sln"))?;
        let b = catalog.add(Project::new("B", "/nowhere/b.sln"))?;

        assert!(catalog.exists_by_path(0, Path::new("/nowhere/a.sln"))?);
        assert!(!catalog.exists_by_path(a, Path::new("/nowhere/a.sln"))?);
        assert!(catalog.exists_by_path(b, Path::new("/nowhere/a.sln"))?);
        assert!(!catalog.exists_by_path(0, Path::new("/nowhere/c.sln"))?);

        Ok(())
    }

    #[test]
    fn test_remove_unknown_project() -> anyhow::Result<()> {
        let mut catalog = in_memory_catalog()?;
        let err = catalog.remove(99).unwrap_err();
        assert!(matches!(err, ProjectExplorerError::ProjectNotFound { id: 99 }));
        Ok(())
    }

    #[test]
    fn test_catalog_persists_only_identity() -> anyhow::Result<()> {
        let (_repo, descriptor) = create_project_repo()?;
        let dir = setup_plain_dir()?;
        let db_path = dir.path().join("projects.db");

        let (kept, removed) = {
            let mut catalog = ProjectCatalog::open(Database::open(&db_path)?)?;
            let kept = catalog.add(Project::new("App", &descriptor))?;
            let removed = catalog.add(Project::new("Gone", "/nowhere/gone.sln"))?;
            catalog.add(Project::new("Last", "/nowhere/last.sln"))?;
            catalog.remove(removed)?;
            catalog.update(kept, Some("Renamed".to_string()), None)?;
            catalog.save_changes()?;
            (kept, removed)
        };

        let catalog = ProjectCatalog::open(Database::open(&db_path)?)?;
        let names: Vec<_> = catalog.list().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Renamed", "Last"]);
        assert!(catalog.get(removed).is_none());

        // Status fields are runtime-only
        let project = catalog.require(kept)?;
        assert_eq!(project.vcs_root, None);
        assert_eq!(project.snapshot.last_check, None);

        Ok(())
    }
}
