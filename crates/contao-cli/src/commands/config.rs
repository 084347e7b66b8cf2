//! Config command implementation

use std::path::Path;

use colored::Colorize;

use super::Project;
use crate::error::{CliError, Result};

/// Run the config command
pub fn run_config(dir: &Path, json: bool) -> Result<()> {
    let project = Project::load(dir)?;
    let mut context = project.context();
    let root = context.resolve_root(project.package.extra())?;
    let config = context
        .config()
        .ok_or_else(|| CliError::user(format!("No configuration loaded for {root}")))?;

    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!("{} ({})", "Contao Configuration".bold(), root.as_str().dimmed());
    println!();
    if config.is_empty() {
        println!("  {}", "None".dimmed());
    }
    for (key, value) in config.iter() {
        println!("  {} = {}", key.cyan(), serde_json::to_string(value)?);
    }

    Ok(())
}
