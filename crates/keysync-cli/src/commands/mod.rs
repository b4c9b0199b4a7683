//! Command implementations for keysync-cli

pub mod sync;

pub use sync::run_sync;
