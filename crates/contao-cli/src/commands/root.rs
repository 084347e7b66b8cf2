//! Root command implementation

use std::path::Path;

use colored::Colorize;
use contao_fs::InstallLayout;

use super::Project;
use crate::error::Result;

/// Run the root command
pub fn run_root(dir: &Path) -> Result<()> {
    let project = Project::load(dir)?;
    let mut context = project.context();
    let root = context.resolve_root(project.package.extra())?;
    let layout = InstallLayout::detect(&root)?;

    println!("{}", "Contao Installation".bold());
    println!();
    println!("{}:     {}", "Root".dimmed(), root.as_str().cyan());
    println!("{}:   {}", "Layout".dimmed(), layout.mode);
    if let Some(version) = context.version() {
        println!("{}:  {}", "Version".dimmed(), version.as_str().green());
    }
    println!(
        "{}:  {}",
        "Config".dimmed(),
        context.config().map(|c| c.len()).unwrap_or(0)
    );

    Ok(())
}
