//! Configuration resolution
//!
//! Settings come from three layers, later ones overriding earlier ones:
//! 1. Built-in defaults (write mode, fully sorted output, no exclusions)
//! 2. A TOML config file: `--config <file>`, or `keysync.toml` in the
//!    target directory when present
//! 3. Command-line overrides

use keysync_fs::{ConfigStore, NormalizedPath};
use keysync_tree::{KeyPath, parse_path_list};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::sync::SyncOptions;
use crate::{Error, Result};

/// Name of the config file looked up in the target directory
pub const CONFIG_FILE_NAME: &str = "keysync.toml";

/// Contents of a config file
///
/// ```toml
/// check_only = false
/// keep_order_depth = 1
/// exclusions = ["meta.generated", "plurals"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub check_only: bool,
    pub keep_order_depth: Option<u32>,
    pub exclusions: Option<Vec<String>>,
}

/// Values given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Only ever switches check-only mode on
    pub check_only: bool,
    pub keep_order_depth: Option<u32>,
    /// Comma-separated list of dot-separated paths
    pub exclusions: Option<String>,
}

/// The effective configuration after merging all layers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub check_only: bool,
    pub keep_order_depth: u32,
    pub exclusions: Vec<KeyPath>,
}

impl ResolvedConfig {
    /// Options for a sync run against `reference_locale`.
    pub fn into_sync_options(self, reference_locale: impl Into<String>) -> SyncOptions {
        SyncOptions {
            reference_locale: reference_locale.into(),
            check_only: self.check_only,
            keep_order_depth: i32::try_from(self.keep_order_depth).unwrap_or(i32::MAX),
            exclusions: self.exclusions,
        }
    }
}

/// Resolves configuration for one target directory
pub struct ConfigResolver {
    directory: NormalizedPath,
    config_file: Option<NormalizedPath>,
}

impl ConfigResolver {
    /// Resolver that looks for `keysync.toml` inside `directory`.
    pub fn new(directory: NormalizedPath) -> Self {
        Self {
            directory,
            config_file: None,
        }
    }

    /// Use `path` instead of the directory's config file. The file must exist.
    pub fn with_config_file(mut self, path: NormalizedPath) -> Self {
        self.config_file = Some(path);
        self
    }

    /// The config file that will be read, if any.
    pub fn config_path(&self) -> Result<Option<NormalizedPath>> {
        if let Some(explicit) = &self.config_file {
            if !explicit.is_file() {
                return Err(Error::ConfigNotFound {
                    path: explicit.to_native(),
                });
            }
            return Ok(Some(explicit.clone()));
        }

        let default = self.directory.join(CONFIG_FILE_NAME);
        Ok(default.is_file().then_some(default))
    }

    /// Load the config file layer, or defaults when there is none.
    pub fn load_file(&self) -> Result<FileConfig> {
        match self.config_path()? {
            Some(path) => {
                debug!(path = %path, "loading config file");
                Ok(ConfigStore::new().load(&path)?)
            }
            None => Ok(FileConfig::default()),
        }
    }

    /// Merge defaults, the config file and `overrides`.
    pub fn resolve(&self, overrides: &Overrides) -> Result<ResolvedConfig> {
        let file = self.load_file()?;

        let exclusions = match &overrides.exclusions {
            Some(list) => parse_path_list(list).map_err(invalid)?,
            None => file
                .exclusions
                .unwrap_or_default()
                .iter()
                .map(|path| path.parse::<KeyPath>())
                .collect::<keysync_tree::Result<Vec<_>>>()
                .map_err(invalid)?,
        };

        let resolved = ResolvedConfig {
            check_only: file.check_only || overrides.check_only,
            keep_order_depth: overrides
                .keep_order_depth
                .or(file.keep_order_depth)
                .unwrap_or(0),
            exclusions,
        };
        debug!(?resolved, "resolved configuration");
        Ok(resolved)
    }
}

fn invalid(err: keysync_tree::Error) -> Error {
    Error::InvalidConfig {
        message: err.to_string(),
    }
}
