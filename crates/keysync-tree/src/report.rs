//! Reporting sink for discrepancies and progress
//!
//! The reconciler and the sync engine never print. They talk to a
//! [`Reporter`], which the binary implements for the console and tests
//! implement with [`RecordingReporter`].

use std::sync::{Mutex, PoisonError};

/// Receives user-facing messages.
pub trait Reporter {
    /// A non-fatal observation, such as a key missing from one side.
    fn warn(&self, message: &str);

    /// Progress and summary output.
    fn info(&self, message: &str);

    /// The error that ended the run.
    fn fatal(&self, message: &str);
}

/// Severity of a recorded message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Warn,
    Info,
    Fatal,
}

/// Reporter that keeps every message in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    entries: Mutex<Vec<(Level, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages in the order they were reported.
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.lock().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.at_level(Level::Warn)
    }

    pub fn infos(&self) -> Vec<String> {
        self.at_level(Level::Info)
    }

    fn at_level(&self, level: Level) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        self.lock().push((level, message.to_string()));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Level, String)>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Reporter for RecordingReporter {
    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn fatal(&self, message: &str) {
        self.push(Level::Fatal, message);
    }
}

/// Reporter that forwards every message to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn fatal(&self, message: &str) {
        tracing::error!("{message}");
    }
}
