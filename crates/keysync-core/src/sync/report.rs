//! Report types for sync runs

use keysync_tree::{Discrepancy, KeyPath};
use serde::Serialize;

/// What happened to one derived document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentReport {
    /// File name of the document
    pub file: String,
    /// Keys copied in from the reference
    pub additions: Vec<KeyPath>,
    /// Keys present on one side only
    pub discrepancies: Vec<Discrepancy>,
}

/// Report from a sync run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncReport {
    /// File name of the reference document
    pub reference: String,
    /// Whether the run left every file untouched
    pub check_only: bool,
    /// One entry per derived document, in processing order
    pub documents: Vec<DocumentReport>,
}

impl SyncReport {
    pub fn new(reference: impl Into<String>, check_only: bool) -> Self {
        Self {
            reference: reference.into(),
            check_only,
            documents: Vec::new(),
        }
    }

    pub fn total_additions(&self) -> usize {
        self.documents.iter().map(|d| d.additions.len()).sum()
    }

    pub fn total_discrepancies(&self) -> usize {
        self.documents.iter().map(|d| d.discrepancies.len()).sum()
    }

    /// Look up the report for a document by file name.
    pub fn document(&self, file: &str) -> Option<&DocumentReport> {
        self.documents.iter().find(|d| d.file == file)
    }
}
