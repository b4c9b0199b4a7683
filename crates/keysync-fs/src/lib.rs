//! Filesystem layer for keysync
//!
//! Lists, loads and saves JSON documents, and loads configuration files.

pub mod config;
pub mod document;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use document::{DOCUMENT_EXTENSION, list_documents, load_document, save_document, to_pretty_json};
pub use error::{Error, Result};
pub use path::NormalizedPath;
