//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Contao Composer plugin - inspect and drive the Contao installer integration
#[derive(Parser, Debug)]
#[command(name = "contao-composer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory containing composer.json (defaults to the current directory)
    #[arg(short = 'd', long, global = true, env = "CONTAO_COMPOSER_PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the resolved Contao installation root
    Root,

    /// Show the merged Contao configuration
    Config {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Activate the plugin against composer.json and show what it registers
    Activate {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Deliver a lifecycle event to the plugin
    ///
    /// Examples:
    ///   contao-composer dispatch post-update-cmd
    ///   contao-composer dispatch post-autoload-dump --payload '{"dev-mode":true}'
    Dispatch {
        /// Event name (pre-update-cmd, post-update-cmd, post-autoload-dump, pre-file-download)
        event: String,

        /// Event payload as JSON
        #[arg(long)]
        payload: Option<String>,
    },

    /// Remove Contao's internal cache directories
    CleanCache,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["contao-composer", "root", "-v", "-d", "/srv/site/composer"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.project_dir, Some(PathBuf::from("/srv/site/composer")));
        assert_eq!(cli.command, Some(Commands::Root));
    }

    #[test]
    fn parses_dispatch_with_payload() {
        let cli = Cli::try_parse_from([
            "contao-composer",
            "dispatch",
            "post-autoload-dump",
            "--payload",
            "{}",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Dispatch {
                event: "post-autoload-dump".to_string(),
                payload: Some("{}".to_string()),
            })
        );
    }

    #[test]
    fn dispatch_requires_event() {
        assert!(Cli::try_parse_from(["contao-composer", "dispatch"]).is_err());
    }

    #[test]
    fn clean_cache_is_kebab_case() {
        let cli = Cli::try_parse_from(["contao-composer", "clean-cache"]).unwrap();
        assert_eq!(cli.command, Some(Commands::CleanCache));
    }
}
