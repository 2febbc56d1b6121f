use project_explorer::{clean_build_outputs, clean_vcs_untracked, Project};

mod common;
use common::{fixtures::*, repository::*};

#[cfg(test)]
mod cleanup_tests {
    use super::*;

    fn tracked_project(repo: &TestRepo) -> anyhow::Result<Project> {
        create_file(repo.path(), ".gitignore", "*.log\n")?;
        let descriptor = create_file(repo.path(), DESCRIPTOR, "<Project />\n")?;
        create_file(repo.path(), "tracked.txt", "keep\n")?;
        git_add(repo.path(), ".")?;
        git_commit(repo.path(), "Initial commit")?;

        let mut catalog = in_memory_catalog()?;
        let id = catalog.add(Project::new("App", &descriptor))?;
        Ok(catalog.require(id)?.clone())
    }

    #[test]
    fn test_git_clean_untracked_only() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        let project = tracked_project(&repo)?;

        let stray = create_file(repo.path(), "stray.txt", "x\n")?;
        let nested = create_file(repo.path(), "notes/draft.md", "x\n")?;
        let log = create_file(repo.path(), "build.log", "x\n")?;

        assert!(clean_vcs_untracked(&project, true, false)?);

        assert!(!stray.exists());
        assert!(!nested.exists());
        assert!(log.exists());
        assert!(repo.path().join("tracked.txt").exists());
        assert!(repo.path().join(DESCRIPTOR).exists());

        Ok(())
    }

    #[test]
    fn test_git_clean_ignored_only() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        let project = tracked_project(&repo)?;

        let stray = create_file(repo.path(), "stray.txt", "x\n")?;
        let top = create_file(repo.path(), "top.log", "x\n")?;
        let log = create_file(repo.path(), "logs/build.log", "x\n")?;
        let mixed = create_file(repo.path(), "notes/run.log", "x\n")?;
        let draft = create_file(repo.path(), "notes/draft.md", "x\n")?;

        assert!(clean_vcs_untracked(&project, false, true)?);

        assert!(stray.exists());
        assert!(!top.exists());
        assert!(!log.exists());
        // Ignored files inside an untracked folder are found too
        assert!(!mixed.exists());
        assert!(draft.exists());
        assert!(repo.path().join(".gitignore").exists());

        Ok(())
    }

    #[test]
    fn test_git_clean_with_nothing_selected() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        let project = tracked_project(&repo)?;
        let stray = create_file(repo.path(), "stray.txt", "x\n")?;

        assert!(clean_vcs_untracked(&project, false, false)?);
        assert!(stray.exists());

        Ok(())
    }

    #[test]
    fn test_git_clean_unreadable_repository() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        let project = tracked_project(&repo)?;
        break_repository(repo.path())?;

        assert!(clean_vcs_untracked(&project, true, true).is_err());
        assert!(repo.path().join("tracked.txt").exists());

        Ok(())
    }

    #[test]
    fn test_clean_build_outputs_nested() -> anyhow::Result<()> {
        let (dir, descriptor) = create_plain_project()?;
        let dll = create_file(dir.path(), "src/App/bin/Release/app.dll", "x")?;
        let cache = create_file(dir.path(), "src/App/obj/project.assets.json", "{}")?;
        let source = create_file(dir.path(), "src/App/Program.cs", "class P {}")?;

        let project = Project::with_id(1, "App", &descriptor);
        assert!(clean_build_outputs(&project));

        assert!(!dll.exists());
        assert!(!dir.path().join("src/App/bin").exists());
        assert!(!cache.exists());
        assert!(source.exists());

        // Nothing left to delete is still a success
        assert!(clean_build_outputs(&project));

        Ok(())
    }
}
