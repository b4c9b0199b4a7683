//! Directory-wide synchronization against a reference document
//!
//! The [`SyncEngine`] loads the reference document, normalizes its key
//! order, then reconciles every other document in the directory against it.

mod engine;
mod report;

pub use engine::{SyncEngine, SyncOptions};
pub use report::{DocumentReport, SyncReport};
