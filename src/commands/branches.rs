use crate::commands::AppContext;
use crate::core::{
    error::Result,
    git::GitRepo,
    output::{format_branch_line, print_info, print_section_header},
    resolver,
};

pub fn execute_branches(ctx: &AppContext, id: i64) -> Result<()> {
    let project = ctx.catalog().require(id)?.clone();

    let Some(root) = project
        .vcs_root
        .clone()
        .or_else(|| resolver::resolve_vcs_root(&project.path))
    else {
        print_info(&format!("'{}' is not inside a git repository.", project.name));
        return Ok(());
    };

    let mut branches = GitRepo::open(&root)?.read_branches()?;
    if branches.is_empty() {
        print_info("No branches found. Make your first commit to create one.");
        return Ok(());
    }

    // Most recently active first
    branches.sort_by(|a, b| b.last_commit().cmp(&a.last_commit()));

    print_section_header(&format!("Branches of {}", project.name));
    for branch in &branches {
        println!("{}", format_branch_line(branch));
    }
    println!();

    Ok(())
}
