//! The sync command
//!
//! Resolves configuration for the target directory and runs the sync engine.

use keysync_core::{ConfigResolver, SyncEngine, SyncReport};
use keysync_fs::NormalizedPath;
use keysync_tree::Reporter;
use tracing::debug;

use crate::cli::Cli;
use crate::error::Result;

/// Run a sync as described by `cli`, sending messages to `reporter`.
pub fn run_sync(cli: &Cli, reporter: &dyn Reporter) -> Result<SyncReport> {
    let directory = NormalizedPath::new(&cli.directory);

    let mut resolver = ConfigResolver::new(directory.clone());
    if let Some(config) = &cli.config {
        resolver = resolver.with_config_file(NormalizedPath::new(config));
    }
    let options = resolver
        .resolve(&cli.overrides())?
        .into_sync_options(cli.reference_locale.as_str());
    debug!(?options, "sync options");

    let report = SyncEngine::new(directory, options, reporter).run()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(report)
}
