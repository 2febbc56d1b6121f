use crate::commands::AppContext;
use crate::core::{
    error::Result,
    output::{print_error, print_info, print_success},
    settings::SettingsProject,
    state::Project,
};

/// Adds every project listed in the settings file that is not tracked yet.
///
/// Entries that cannot be added are reported and skipped; the rest are still imported.
pub fn execute_import(ctx: &AppContext) -> Result<()> {
    let entries = ctx.settings.settings.projects.clone();
    if entries.is_empty() {
        print_info(&format!(
            "No projects listed in {}.",
            ctx.settings.path().display()
        ));
        return Ok(());
    }

    let mut catalog = ctx.catalog();
    let mut imported = 0usize;
    let mut failed = 0usize;
    for entry in entries {
        if catalog.exists_by_path(0, &entry.path)? {
            log::info!("Skipping {}: already tracked", entry.path.display());
            continue;
        }

        match catalog.add(Project::new(entry.name, entry.path.clone())) {
            Ok(_) => imported += 1,
            Err(e) => {
                log::warn!("Could not import {}: {e}", entry.path.display());
                print_error(&format!("{}: {e}", entry.path.display()));
                failed += 1;
            }
        }
    }

    if failed == 0 {
        print_success(&format!("Imported {imported} project(s)"));
    } else {
        print_success(&format!(
            "Imported {imported} project(s), {failed} could not be added"
        ));
    }
    Ok(())
}

/// Writes the catalog's name/path list to the settings file.
pub fn execute_export(ctx: &mut AppContext) -> Result<()> {
    let projects: Vec<SettingsProject> = ctx
        .catalog()
        .list()
        .iter()
        .map(|p| SettingsProject {
            name: p.name.clone(),
            path: p.path.clone(),
        })
        .collect();

    let count = projects.len();
    ctx.settings.settings.projects = projects;
    ctx.settings.save()?;

    print_success(&format!(
        "Exported {count} project(s) to {}",
        ctx.settings.path().display()
    ));
    Ok(())
}
