use crate::commands::AppContext;
use crate::core::{
    config::ConfigKey,
    error::Result,
    output::print_info,
    refresh::RefreshReport,
    scheduler::RefreshScheduler,
    state::TIMESTAMP_FORMAT,
};
use colored::*;
use std::sync::Arc;

/// Default refresh interval when neither the flag nor the configuration sets one.
pub const DEFAULT_INTERVAL_MINUTES: u64 = 5;

pub fn execute_watch(ctx: &AppContext, interval_minutes: Option<u64>) -> Result<()> {
    let minutes = interval_minutes.unwrap_or_else(|| {
        ctx.config
            .load_value(ConfigKey::RefreshIntervalMinutes, DEFAULT_INTERVAL_MINUTES)
    });

    let mut scheduler = RefreshScheduler::new(ctx.refresher.clone())
        .with_listener(Arc::new(|report: &RefreshReport| print_tick(report)));
    scheduler.enable_minutes(minutes)?;

    print_info(&format!(
        "Auto refresh every {minutes} minute(s). Press Enter to stop."
    ));

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;

    scheduler.disable_and_wait();
    Ok(())
}

fn print_tick(report: &RefreshReport) {
    let at = report
        .finished_at
        .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default();

    println!(
        "{} {} refreshed, {} without repository, {} failed",
        format!("[{at}]").bright_black(),
        report.refreshed.to_string().white(),
        report.skipped.to_string().white(),
        report.failed.len().to_string().white()
    );
}
