use crate::commands::AppContext;
use crate::core::{
    cleanup,
    config::ConfigKey,
    error::{ProjectExplorerError, Result},
    output::print_success,
};

pub fn execute_clean(ctx: &AppContext, id: i64, confirmed: bool) -> Result<()> {
    let project = ctx.catalog().require(id)?.clone();
    if !confirmed {
        return Err(ProjectExplorerError::confirmation_required(
            "Deleting the 'bin' and 'obj' folders",
        ));
    }

    if !cleanup::clean_build_outputs(&project) {
        return Err(ProjectExplorerError::cleanup_failed(&project.path));
    }

    print_success("'bin' and 'obj' folder successfully cleaned.");
    Ok(())
}

pub fn execute_git_clean(
    ctx: &AppContext,
    id: i64,
    untracked: Option<bool>,
    ignored: Option<bool>,
    confirmed: bool,
) -> Result<()> {
    let project = ctx.catalog().require(id)?.clone();

    let untracked =
        untracked.unwrap_or_else(|| ctx.config.load_value(ConfigKey::GitCleanUntracked, true));
    let ignored =
        ignored.unwrap_or_else(|| ctx.config.load_value(ConfigKey::GitCleanIgnored, false));

    if !confirmed {
        return Err(ProjectExplorerError::confirmation_required(
            "Deleting untracked/ignored files",
        ));
    }

    cleanup::clean_vcs_untracked(&project, untracked, ignored)?;

    let what = match (untracked, ignored) {
        (true, true) => "Untracked and ignored files",
        (true, false) => "Untracked files",
        (false, true) => "Ignored files",
        (false, false) => "Nothing",
    };
    print_success(&format!("{what} removed from '{}'.", project.name));
    Ok(())
}
