use crate::commands::AppContext;
use crate::core::{error::Result, output::print_success};

pub fn execute_remove(ctx: &AppContext, id: i64) -> Result<()> {
    let project = ctx.catalog().remove(id)?;
    print_success(&format!("Removed project [{id}] {}", project.name));
    Ok(())
}
