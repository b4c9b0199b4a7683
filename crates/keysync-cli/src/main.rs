//! keysync CLI
//!
//! Reconciles a directory of locale documents against a reference locale.

mod cli;
mod commands;
mod console;
mod error;
mod logging;

use clap::Parser;
use keysync_tree::{Reporter, TracingReporter};

use cli::Cli;
use console::ConsoleReporter;
use error::{CliError, Result};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version are not failures; argument errors are.
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    // With --json, stdout carries only the report, so messages go to the log.
    let reporter: &dyn Reporter = if cli.json {
        &TracingReporter
    } else {
        &ConsoleReporter
    };

    if let Err(e) = run(&cli, reporter) {
        reporter.fatal(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli, reporter: &dyn Reporter) -> Result<()> {
    logging::init(cli.verbose).map_err(|e| CliError::Logging {
        message: e.to_string(),
    })?;
    tracing::debug!("Verbose mode enabled");

    commands::run_sync(cli, reporter)?;
    Ok(())
}
