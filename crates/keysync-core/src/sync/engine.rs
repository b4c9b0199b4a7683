//! The sync engine

use keysync_fs::{
    DOCUMENT_EXTENSION, NormalizedPath, list_documents, load_document, save_document,
};
use keysync_tree::{ExclusionSet, KeyPath, Reconciler, Reporter, normalize_order};
use serde_json::Value;
use tracing::{debug, info};

use super::{DocumentReport, SyncReport};
use crate::{Error, Result};

/// Settings for one sync run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Locale id of the reference document (`<id>.json`)
    pub reference_locale: String,
    /// Report discrepancies without writing any file
    pub check_only: bool,
    /// Number of top levels whose key order is kept; deeper levels are sorted
    pub keep_order_depth: i32,
    /// Branches left out of the comparison in every derived document
    pub exclusions: Vec<KeyPath>,
}

impl SyncOptions {
    pub fn new(reference_locale: impl Into<String>) -> Self {
        Self {
            reference_locale: reference_locale.into(),
            ..Default::default()
        }
    }

    /// File name of the reference document.
    pub fn reference_file_name(&self) -> String {
        format!("{}.{}", self.reference_locale, DOCUMENT_EXTENSION)
    }
}

/// Reconciles every document of a directory against its reference document.
pub struct SyncEngine<'r> {
    directory: NormalizedPath,
    options: SyncOptions,
    reporter: &'r dyn Reporter,
}

impl<'r> SyncEngine<'r> {
    pub fn new(directory: NormalizedPath, options: SyncOptions, reporter: &'r dyn Reporter) -> Self {
        Self {
            directory,
            options,
            reporter,
        }
    }

    /// Run the sync.
    ///
    /// Stops at the first error; documents processed before it may already
    /// have been written.
    pub fn run(&self) -> Result<SyncReport> {
        let documents = list_documents(&self.directory)?;
        let reference_name = self.options.reference_file_name();
        let reference_path = documents
            .iter()
            .find(|path| path.file_name() == Some(reference_name.as_str()))
            .cloned()
            .ok_or_else(|| Error::ReferenceNotFound {
                locale: self.options.reference_locale.clone(),
            })?;

        info!(
            directory = %self.directory,
            reference = %reference_name,
            documents = documents.len() - 1,
            check_only = self.options.check_only,
            "starting sync"
        );

        let reference = self.prepare_reference(&reference_path)?;
        let exclusions = ExclusionSet::new(&self.options.exclusions);
        if !exclusions.is_empty() {
            let rules: Vec<String> = self.options.exclusions.iter().map(ToString::to_string).collect();
            debug!(rules = %rules.join(", "), "excluding branches");
        }

        let mut report = SyncReport::new(reference_name, self.options.check_only);
        for path in documents.iter().filter(|path| **path != reference_path) {
            report
                .documents
                .push(self.sync_document(path, &reference, &exclusions)?);
        }

        info!(
            additions = report.total_additions(),
            discrepancies = report.total_discrepancies(),
            "sync finished"
        );
        Ok(report)
    }

    /// Load the reference, normalize its key order and write it back.
    fn prepare_reference(&self, path: &NormalizedPath) -> Result<Value> {
        let reference = normalize_order(load_document(path)?, self.options.keep_order_depth);
        if !self.options.check_only {
            save_document(path, &reference)?;
        }
        Ok(reference)
    }

    fn sync_document(
        &self,
        path: &NormalizedPath,
        reference: &Value,
        exclusions: &ExclusionSet<'_>,
    ) -> Result<DocumentReport> {
        let file = path.file_name().unwrap_or(path.as_str()).to_string();
        debug!(file = %file, "reconciling");

        let derived = load_document(path)?;
        let outcome = Reconciler::new(file.as_str(), self.reporter)
            .check_only(self.options.check_only)
            .reconcile(derived, reference, exclusions);

        if !self.options.check_only {
            let document = normalize_order(outcome.document, self.options.keep_order_depth);
            save_document(path, &document)?;
        }

        if !outcome.additions.is_empty() {
            self.reporter.info(&format!("New keys added to {file}:"));
            for addition in &outcome.additions {
                self.reporter.info(&format!("  {addition}"));
            }
        }

        Ok(DocumentReport {
            file,
            additions: outcome.additions,
            discrepancies: outcome.discrepancies,
        })
    }
}
