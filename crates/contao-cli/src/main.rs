//! Contao Composer plugin CLI
//!
//! Drives plugin activation, lifecycle events and cache invalidation against
//! a project's `composer.json` and the Contao installation it belongs to.

mod cli;
mod commands;
mod console;
mod error;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays parseable
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    let dir = match cli.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Some(cmd) => execute_command(cmd, dir),
        None => {
            println!("{} Contao Composer plugin", "contao-composer".green().bold());
            println!();
            println!("Run {} for available commands.", "contao-composer --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, dir: PathBuf) -> Result<()> {
    tracing::debug!(dir = %dir.display(), command = ?cmd, "Running command");
    match cmd {
        Commands::Root => commands::run_root(&dir),
        Commands::Config { json } => commands::run_config(&dir, json),
        Commands::Activate { json } => commands::run_activate(&dir, json),
        Commands::Dispatch { event, payload } => {
            commands::run_dispatch(&dir, &event, payload.as_deref())
        }
        Commands::CleanCache => commands::run_clean_cache(&dir),
    }
}
