use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

mod common;
use common::{assertions::*, fixtures::*, repository::*};

/// Binary pointed at a throwaway catalog and settings file
fn explorer(state: &Path) -> Command {
    let mut cmd = Command::cargo_bin("project-explorer").unwrap();
    cmd.arg("--database")
        .arg(state.join("projects.db"))
        .arg("--settings")
        .arg(state.join("settings.json"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_add_and_list() -> anyhow::Result<()> {
        let state = setup_plain_dir()?;
        let (_repo, descriptor) = create_project_repo()?;

        explorer(state.path())
            .arg("add")
            .arg(&descriptor)
            .arg("--name")
            .arg("Billing")
            .assert()
            .success()
            .stdout(predicates::str::contains("Added project [1] Billing"));

        explorer(state.path())
            .arg("list")
            .assert()
            .success()
            .stdout(has_project_line(1, "Billing"))
            .stdout(predicates::str::contains("main"));

        Ok(())
    }

    #[test]
    fn test_add_duplicate_fails() -> anyhow::Result<()> {
        let state = setup_plain_dir()?;
        let (_dir, descriptor) = create_plain_project()?;

        explorer(state.path()).arg("add").arg(&descriptor).assert().success();
        explorer(state.path())
            .arg("add")
            .arg(&descriptor)
            .assert()
            .failure()
            .stdout(duplicate_path());

        Ok(())
    }

    #[test]
    fn test_status_shows_branch() -> anyhow::Result<()> {
        let state = setup_plain_dir()?;
        let (repo, descriptor) = create_project_repo()?;
        explorer(state.path()).arg("add").arg(&descriptor).assert().success();
        create_file(repo.path(), "todo.txt", "x\n")?;

        explorer(state.path())
            .args(["status", "1"])
            .assert()
            .success()
            .stdout(predicates::str::contains("Branch: main"))
            .stdout(predicates::str::contains("todo.txt"))
            .stdout(predicates::str::contains("Test User - "));

        Ok(())
    }

    #[test]
    fn test_status_unknown_project() -> anyhow::Result<()> {
        let state = setup_plain_dir()?;

        explorer(state.path())
            .args(["status", "7"])
            .assert()
            .failure()
            .stdout(predicates::str::contains("Project 7 is not tracked"));

        Ok(())
    }

    #[test]
    fn test_clean_requires_confirmation() -> anyhow::Result<()> {
        let state = setup_plain_dir()?;
        let (dir, descriptor) = create_plain_project()?;
        let bin = create_file(dir.path(), "bin/app.dll", "x")?;
        explorer(state.path()).arg("add").arg(&descriptor).assert().success();

        explorer(state.path())
            .args(["clean", "1"])
            .assert()
            .failure()
            .stdout(requires_confirmation());
        assert!(bin.exists());

        explorer(state.path())
            .args(["clean", "1", "--yes"])
            .assert()
            .success();
        assert!(!bin.exists());

        Ok(())
    }

    #[test]
    fn test_config_set_and_get() -> anyhow::Result<()> {
        let state = setup_plain_dir()?;

        explorer(state.path())
            .args(["config", "set", "editor-path", "/usr/bin/vim"])
            .assert()
            .success();

        explorer(state.path())
            .args(["config", "get", "editor-path"])
            .assert()
            .success()
            .stdout(predicates::str::contains("/usr/bin/vim"));

        let settings = fs::read_to_string(state.path().join("settings.json"))?;
        assert!(settings.contains("/usr/bin/vim"));

        explorer(state.path())
            .args(["config", "get", "no-such-key"])
            .assert()
            .failure()
            .stdout(predicates::str::contains("Unknown configuration key"));

        Ok(())
    }

    #[test]
    fn test_export_then_import() -> anyhow::Result<()> {
        let state = setup_plain_dir()?;
        let other = setup_plain_dir()?;
        let (_dir, descriptor) = create_plain_project()?;

        explorer(state.path()).arg("add").arg(&descriptor).assert().success();
        explorer(state.path()).arg("export").assert().success();

        fs::copy(
            state.path().join("settings.json"),
            other.path().join("settings.json"),
        )?;

        explorer(other.path())
            .arg("import")
            .assert()
            .success()
            .stdout(predicates::str::contains("Imported 1 project(s)"));

        // Already tracked entries are skipped
        explorer(other.path())
            .arg("import")
            .assert()
            .success()
            .stdout(predicates::str::contains("Imported 0 project(s)"));

        explorer(other.path())
            .arg("list")
            .assert()
            .success()
            .stdout(has_project_line(1, DESCRIPTOR.trim_end_matches(".csproj")));

        Ok(())
    }

    #[test]
    fn test_add_missing_descriptor_fails() -> anyhow::Result<()> {
        let state = setup_plain_dir()?;

        explorer(state.path())
            .arg("add")
            .arg(state.path().join("Missing.sln"))
            .assert()
            .failure()
            .stdout(predicates::str::contains("File does not exist"));

        explorer(state.path())
            .arg("list")
            .assert()
            .success()
            .stdout(predicates::str::contains("No projects tracked yet"));

        Ok(())
    }

    #[test]
    fn test_edit_path_reads_new_location() -> anyhow::Result<()> {
        let state = setup_plain_dir()?;
        let (_dir, plain) = create_plain_project()?;
        let (_repo, descriptor) = create_project_repo()?;

        explorer(state.path()).arg("add").arg(&plain).assert().success();
        explorer(state.path())
            .args(["edit", "1", "--path"])
            .arg(&descriptor)
            .assert()
            .success();

        explorer(state.path())
            .args(["status", "1"])
            .assert()
            .success()
            .stdout(predicates::str::contains("Branch: main"));

        Ok(())
    }

    #[test]
    fn test_import_continues_past_unreadable_repository() -> anyhow::Result<()> {
        let state = setup_plain_dir()?;
        let (broken, broken_descriptor) = create_project_repo()?;
        break_repository(broken.path())?;
        let (_dir, plain) = create_plain_project()?;

        let settings = serde_json::json!({
            "projects": [
                { "name": "Broken", "path": broken_descriptor },
                { "name": "Plain", "path": plain },
            ]
        });
        fs::write(
            state.path().join("settings.json"),
            serde_json::to_string_pretty(&settings)?,
        )?;

        explorer(state.path())
            .arg("import")
            .assert()
            .success()
            .stdout(predicates::str::contains(
                "Imported 1 project(s), 1 could not be added",
            ));

        explorer(state.path())
            .arg("list")
            .assert()
            .success()
            .stdout(has_project_line(1, "Plain"))
            .stdout(predicates::str::contains("Broken").not());

        Ok(())
    }
}
