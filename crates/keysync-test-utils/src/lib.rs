//! Shared test utilities for the keysync workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`locale`]: [`LocaleDir`] builder for directories of locale documents

pub mod locale;

pub use locale::LocaleDir;
