//! Console output

use colored::Colorize;
use keysync_tree::Reporter;

/// Reporter writing to the terminal.
///
/// Warnings go to stderr in green, progress to stdout, and the fatal error
/// to stderr in red.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn warn(&self, message: &str) {
        eprintln!("{}", message.green());
    }

    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn fatal(&self, message: &str) {
        eprintln!("{}", message.red());
    }
}
