//! Unified output formatting utilities for consistent CLI presentation.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, green for success, blue for names,
//!   bright_black for secondary details
//! - **Standardized spacing**: Newline before and after command output

use crate::core::{
    file_status::FileStatusCategory,
    state::{BranchSnapshot, Project, TIMESTAMP_FORMAT},
};
use colored::*;

pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Color per status category
pub fn get_status_color_style(category: FileStatusCategory) -> Color {
    match category {
        FileStatusCategory::Added | FileStatusCategory::Untracked => Color::Green,
        FileStatusCategory::Modified
        | FileStatusCategory::Renamed
        | FileStatusCategory::TypeChanged => Color::Yellow,
        FileStatusCategory::Deleted | FileStatusCategory::Conflicted => Color::Red,
        _ => Color::BrightBlack,
    }
}

/// One catalog line: `[id] name  branch  status`
pub fn format_project_line(project: &Project) -> String {
    let branch = if project.vcs_root.is_some() {
        project.snapshot.branch.blue().to_string()
    } else {
        "no repository".bright_black().to_string()
    };

    format!(
        "{}{}{} {}  {}  {}",
        "[".bright_black(),
        project.id.to_string().white(),
        "]".bright_black(),
        project.name.white(),
        branch,
        project.snapshot.status_text().bright_black()
    )
}

pub fn print_project_details(project: &Project) {
    print_section_header(&project.name);
    println!("  {} {}", "Path:".bright_black(), project.path.display());

    let Some(root) = &project.vcs_root else {
        println!("  {} {}", "Repository:".bright_black(), "none".bright_black());
        println!();
        return;
    };

    let snapshot = &project.snapshot;
    println!("  {} {}", "Repository:".bright_black(), root.display());
    println!("  {} {}", "Branch:".bright_black(), snapshot.branch.blue());
    println!("  {} {}", "Last commit:".bright_black(), snapshot.last_commit);
    println!("  {} {}", "Status:".bright_black(), snapshot.status_info());
    if let Some(checked) = snapshot.last_check {
        println!(
            "  {} {}",
            "Last check:".bright_black(),
            checked.format(TIMESTAMP_FORMAT)
        );
    }

    if snapshot.files.is_empty() {
        println!("\n  {}", snapshot.status_text().bright_black());
    } else {
        println!();
        for file in &snapshot.files {
            let label = format!("({})", file.category.description());
            println!(
                "  {:<28} {}",
                label.color(get_status_color_style(file.category)),
                file.path.display()
            );
        }
    }
    println!();
}

pub fn format_branch_line(branch: &BranchSnapshot) -> String {
    let marker = if branch.is_current_head { "*" } else { " " };
    let mut flags = Vec::new();
    if branch.is_remote {
        flags.push("remote");
    }
    if branch.is_tracking {
        flags.push("tracking");
    }

    let last = branch
        .last_commit()
        .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{}{}{} {}  {} {}  {}{}",
        "[".bright_black(),
        marker.white(),
        "]".bright_black(),
        branch.name.blue(),
        branch.commits.len().to_string().white(),
        "commit(s)".bright_black(),
        last.bright_black(),
        if flags.is_empty() {
            String::new()
        } else {
            format!("  ({})", flags.join(", ")).bright_black().to_string()
        }
    )
}
