use crate::commands::AppContext;
use crate::core::{
    error::Result,
    output::{format_project_line, print_info, print_section_header},
};

pub fn execute_list(ctx: &AppContext, filter: Option<String>) -> Result<()> {
    ctx.refresher.refresh_all_tolerant();

    let catalog = ctx.catalog();
    let term = filter.unwrap_or_default();
    let projects = catalog.filter(&term);

    if projects.is_empty() {
        if catalog.is_empty() {
            print_info("No projects tracked yet. Add one with 'project-explorer add <path>'.");
        } else {
            print_info(&format!("No project matches '{term}'."));
        }
        return Ok(());
    }

    print_section_header("Projects");
    for project in projects {
        println!("{}", format_project_line(project));
    }
    println!();

    Ok(())
}
