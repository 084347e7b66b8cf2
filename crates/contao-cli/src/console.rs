//! Terminal implementation of the plugin's output channel

use colored::Colorize;
use contao_core::Io;

/// Prints plugin messages: information to stdout, warnings to stderr.
#[derive(Debug, Default)]
pub struct ConsoleIo {
    warnings: usize,
}

impl ConsoleIo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of warnings printed so far.
    pub fn warnings(&self) -> usize {
        self.warnings
    }
}

impl Io for ConsoleIo {
    fn write(&mut self, message: &str) {
        println!("{}", message);
    }

    fn warn(&mut self, message: &str) {
        self.warnings += 1;
        eprintln!("{}: {}", "warning".yellow().bold(), message);
    }
}
