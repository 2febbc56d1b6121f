use crate::commands::AppContext;
use crate::core::{error::Result, output::print_project_details};

pub fn execute_status(ctx: &AppContext, id: i64) -> Result<()> {
    ctx.refresher.refresh_one(id)?;

    let catalog = ctx.catalog();
    print_project_details(catalog.require(id)?);
    Ok(())
}
