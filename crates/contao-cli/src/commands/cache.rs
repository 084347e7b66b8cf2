//! Clean-cache command implementation

use std::path::Path;

use colored::Colorize;
use contao_core::clean_cache;

use super::Project;
use crate::console::ConsoleIo;
use crate::error::Result;

/// Run the clean-cache command
///
/// Directories that cannot be removed are reported as warnings; the command
/// still succeeds, matching what happens after an update.
pub fn run_clean_cache(dir: &Path) -> Result<()> {
    let project = Project::load(dir)?;
    let mut context = project.context();
    let root = context.resolve_root(project.package.extra())?;

    let mut io = ConsoleIo::new();
    let report = clean_cache(&mut io, &root);

    if report.removed.is_empty() && report.failures.is_empty() {
        println!("{}", "Cache already clean".dimmed());
    } else if report.is_success() {
        println!(
            "{} Removed {} cache director{}",
            "OK".green().bold(),
            report.removed.len(),
            if report.removed.len() == 1 { "y" } else { "ies" }
        );
    } else {
        println!(
            "{} {} of {} cache directories could not be removed",
            "!".yellow().bold(),
            report.failures.len(),
            report.failures.len() + report.removed.len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contao_test_utils::project::TestProject;

    #[test]
    fn test_clean_cache_removes_dirs() {
        let project = TestProject::new();
        project.contao3_at(".", "3.5.1");
        project.cache_dirs_at(".", &["dca", "language"]);
        let composer = project.mkdir("composer");

        run_clean_cache(&composer).unwrap();

        project.assert_not_exists("system/cache/dca");
        project.assert_not_exists("system/cache/language");
    }
}
