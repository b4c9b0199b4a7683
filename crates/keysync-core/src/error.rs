//! Error types for keysync-core

use std::path::PathBuf;

/// Result type for keysync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in keysync-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No `<locale>.json` in the target directory
    #[error("No file found for the reference locale \"{locale}\"")]
    ReferenceNotFound { locale: String },

    /// Explicitly requested configuration file does not exist
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration values that cannot be used
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Error from keysync-tree
    #[error(transparent)]
    Tree(#[from] keysync_tree::Error),

    /// Filesystem error from keysync-fs
    #[error(transparent)]
    Fs(#[from] keysync_fs::Error),
}
