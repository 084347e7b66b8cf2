//! Dispatch command implementation

use std::path::Path;

use colored::Colorize;
use contao_core::{EventKind, NoopCollaborators, Plugin};
use serde_json::Value;

use super::Project;
use crate::console::ConsoleIo;
use crate::error::{CliError, Result};

/// Run the dispatch command
///
/// The plugin is activated first, as the host would do, then the event is
/// delivered. Events the plugin does not subscribe to are reported and
/// ignored.
pub fn run_dispatch(dir: &Path, event: &str, payload: Option<&str>) -> Result<()> {
    let payload = match payload {
        Some(raw) => serde_json::from_str(raw)
            .map_err(|e| CliError::user(format!("Invalid event payload: {e}")))?,
        None => Value::Null,
    };

    let (context, mut host) = Project::load(dir)?.into_host();
    let mut plugin = Plugin::new(context, NoopCollaborators);
    let mut io = ConsoleIo::new();

    plugin.activate(&mut host, &mut io)?;

    let Some(report) = plugin.dispatch_named(event, payload, &mut host, &mut io)? else {
        println!(
            "{} Event {} is not handled (known: {})",
            "-".dimmed(),
            event.yellow(),
            EventKind::all_names().join(", ")
        );
        return Ok(());
    };

    println!("{} {}", "Dispatched".bold(), report.event.to_string().cyan());
    if report.actions.is_empty() {
        println!("  {}", "No actions".dimmed());
    }
    for action in &report.actions {
        let marker = if report.failed.contains(action) {
            "!".yellow()
        } else {
            "+".green()
        };
        println!("  {} {}", marker, action);
    }

    Ok(())
}
