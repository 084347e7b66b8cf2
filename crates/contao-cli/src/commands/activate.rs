//! Activate command implementation

use std::path::Path;

use colored::Colorize;
use contao_core::{NoopCollaborators, PLUGIN_CONSTRAINT, PLUGIN_PACKAGE, Plugin};
use serde_json::json;

use super::Project;
use crate::console::ConsoleIo;
use crate::error::Result;

/// Run the activate command
///
/// Activation only changes the in-memory host state; `composer.json` is not
/// written back.
pub fn run_activate(dir: &Path, json: bool) -> Result<()> {
    let (context, mut host) = Project::load(dir)?.into_host();
    let mut plugin = Plugin::new(context, NoopCollaborators);
    let mut io = ConsoleIo::new();

    let activation = plugin.activate(&mut host, &mut io)?;

    if json {
        let output = json!({
            "root": activation.root.as_str(),
            "version": plugin.context().version().map(|v| v.as_str()),
            "requirement_injected": activation.requirement_injected,
            "repositories": host.repositories,
            "installers": host.installers,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Plugin Activated".bold());
    println!();
    println!("{}:  {}", "Root".dimmed(), activation.root.as_str().cyan());
    if activation.requirement_injected {
        println!(
            "{} Added requirement {} {}",
            "+".green(),
            PLUGIN_PACKAGE.cyan(),
            PLUGIN_CONSTRAINT
        );
    } else {
        println!("{} Requirement {} already present", "=".dimmed(), PLUGIN_PACKAGE.cyan());
    }
    println!();

    println!("{}:", "Installers".bold());
    for installer in &host.installers {
        println!(
            "  {} {} ({})",
            "+".green(),
            installer.name.cyan(),
            installer.package_types.join(", ")
        );
    }
    println!();

    println!("{}:", "Repositories".bold());
    for repository in host.repositories.iter() {
        println!("  {} {} {}", "+".green(), repository.kind, repository.url.cyan());
    }

    Ok(())
}
