use crate::commands::AppContext;
use crate::core::{
    error::Result,
    output::{print_error, print_success},
    refresh::RefreshReport,
};

pub fn execute_refresh(ctx: &AppContext, strict: bool) -> Result<()> {
    let report = if strict {
        ctx.refresher.refresh_all_strict()?
    } else {
        ctx.refresher.refresh_all_tolerant()
    };

    print_report(&report);
    Ok(())
}

pub fn print_report(report: &RefreshReport) {
    print_success(&format!(
        "Refreshed {} project(s), {} without repository",
        report.refreshed, report.skipped
    ));

    for (id, message) in &report.failed {
        print_error(&format!("Project [{id}]: {message}"));
    }
}
