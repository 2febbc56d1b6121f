use anyhow::Context;
use clap::{Parser, Subcommand};
use project_explorer::commands::*;
use project_explorer::core::{dirs, print_error};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "project-explorer")]
#[command(about = "Catalog local projects and keep their git status fresh")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Catalog database file
    #[arg(long, global = true, env = "PROJECT_EXPLORER_DB")]
    database: Option<PathBuf>,

    /// JSON settings file
    #[arg(long, global = true, env = "PROJECT_EXPLORER_SETTINGS")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tracked projects with their git status
    List {
        /// Only show projects whose name, path or repository contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Track a project by its descriptor file
    Add {
        /// Path of the project file (e.g. a solution or manifest)
        path: PathBuf,
        /// Display name (defaults to the file name without extension)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Change the name or path of a tracked project
    Edit {
        id: i64,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
    /// Stop tracking a project
    Remove { id: i64 },
    /// Show branch, last commit and changed files of a project
    Status { id: i64 },
    /// List all branches of a project
    Branches { id: i64 },
    /// Re-read the git status of every project
    Refresh {
        /// Stop at the first project that fails
        #[arg(long)]
        strict: bool,
    },
    /// Refresh all projects periodically until Enter is pressed
    Watch {
        /// Minutes between refreshes (defaults to the configured value)
        #[arg(short, long)]
        interval: Option<u64>,
    },
    /// Delete the 'bin' and 'obj' folders of a project
    Clean {
        id: i64,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Delete untracked and/or ignored files of a project's repository
    GitClean {
        id: i64,
        /// Delete untracked files (defaults to the configured value)
        #[arg(long)]
        untracked: Option<bool>,
        /// Delete ignored files (defaults to the configured value)
        #[arg(long)]
        ignored: Option<bool>,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Read or write configuration values
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Add the projects listed in the settings file to the catalog
    Import,
    /// Write the catalog's project list to the settings file
    Export,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print one value, or all of them
    Get { key: Option<String> },
    /// Store a value
    Set { key: String, value: String },
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(cli) {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let database = match cli.database {
        Some(path) => path,
        None => dirs::default_database_path()?,
    };
    let settings = match cli.settings {
        Some(path) => path,
        None => dirs::default_settings_path()?,
    };

    let mut ctx = AppContext::open(&database, &settings)
        .with_context(|| format!("Failed to open catalog '{}'", database.display()))?;

    match cli.command {
        Commands::List { filter } => execute_list(&ctx, filter)?,
        Commands::Add { path, name } => execute_add(&ctx, path, name)?,
        Commands::Edit { id, name, path } => execute_edit(&ctx, id, name, path)?,
        Commands::Remove { id } => execute_remove(&ctx, id)?,
        Commands::Status { id } => execute_status(&ctx, id)?,
        Commands::Branches { id } => execute_branches(&ctx, id)?,
        Commands::Refresh { strict } => execute_refresh(&ctx, strict)?,
        Commands::Watch { interval } => execute_watch(&ctx, interval)?,
        Commands::Clean { id, yes } => execute_clean(&ctx, id, yes)?,
        Commands::GitClean {
            id,
            untracked,
            ignored,
            yes,
        } => execute_git_clean(&ctx, id, untracked, ignored, yes)?,
        Commands::Config { action } => match action {
            ConfigAction::Get { key } => execute_config_get(&ctx, key)?,
            ConfigAction::Set { key, value } => execute_config_set(&mut ctx, key, value)?,
        },
        Commands::Import => execute_import(&ctx)?,
        Commands::Export => execute_export(&mut ctx)?,
    }

    Ok(())
}
