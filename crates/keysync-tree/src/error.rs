//! Error types for keysync-tree

/// Result type for keysync-tree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in keysync-tree operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid key path '{path}': {reason}")]
    InvalidKeyPath { path: String, reason: String },
}

impl Error {
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidKeyPath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
