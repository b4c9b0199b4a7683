//! Core orchestration layer for keysync
//!
//! Resolves configuration and drives reconciliation of every document in a
//! directory against the reference document.

pub mod config;
pub mod error;
pub mod sync;

pub use config::{CONFIG_FILE_NAME, ConfigResolver, FileConfig, Overrides, ResolvedConfig};
pub use error::{Error, Result};
pub use sync::{DocumentReport, SyncEngine, SyncOptions, SyncReport};
