use crate::commands::{existing_descriptor, AppContext};
use crate::core::{error::Result, output::print_success};
use std::path::PathBuf;

pub fn execute_edit(
    ctx: &AppContext,
    id: i64,
    name: Option<String>,
    path: Option<PathBuf>,
) -> Result<()> {
    let path = path.map(existing_descriptor).transpose()?;
    let moved = path.is_some();

    {
        let mut catalog = ctx.catalog();
        catalog.update(id, name, path)?;
        catalog.save_changes()?;
    }

    if moved {
        if let Err(e) = ctx.refresher.refresh_one(id) {
            log::warn!("Could not read the status of project {id} at its new path: {e}");
        }
    }

    print_success(&format!("Updated project [{id}]"));
    Ok(())
}
