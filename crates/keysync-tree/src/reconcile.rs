//! Structural reconciliation of a derived document against a reference
//!
//! Both documents are walked together, mapping by mapping. Keys only the
//! derived document has are reported and kept. Keys only the reference has
//! are copied into the derived document, or reported when running in
//! check-only mode. Anything that is not a mapping on both sides is a leaf
//! and left as it is.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{ExclusionSet, KeyPath, Reporter};

/// A key present on one side only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discrepancy {
    /// The derived document has a key the reference lacks
    NotInReference { file: String, path: KeyPath },
    /// The reference has a key the derived document lacks (check-only mode)
    MissingFromDocument { file: String, path: KeyPath },
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInReference { file, path } => {
                write!(f, "Key found in {file} absent in reference file: {path}")
            }
            Self::MissingFromDocument { file, path } => {
                write!(f, "Key found in reference file absent in {file}: {path}")
            }
        }
    }
}

/// Outcome of reconciling one document
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    /// The reconciled derived document
    pub document: Value,
    /// Keys copied in from the reference, in the order they were added
    pub additions: Vec<KeyPath>,
    /// Every discrepancy that was reported
    pub discrepancies: Vec<Discrepancy>,
}

/// Reconciles derived documents against a reference.
///
/// `label` names the derived document in reported messages.
pub struct Reconciler<'r, R: Reporter + ?Sized> {
    label: String,
    check_only: bool,
    reporter: &'r R,
}

impl<'r, R: Reporter + ?Sized> Reconciler<'r, R> {
    pub fn new(label: impl Into<String>, reporter: &'r R) -> Self {
        Self {
            label: label.into(),
            check_only: false,
            reporter,
        }
    }

    /// Report missing keys instead of copying them in.
    pub fn check_only(mut self, check_only: bool) -> Self {
        self.check_only = check_only;
        self
    }

    /// Reconcile `derived` against `reference`, starting from the root with
    /// the given exclusion set.
    ///
    /// Never removes a key from `derived` and never replaces a value that is
    /// already there.
    pub fn reconcile(
        &self,
        derived: Value,
        reference: &Value,
        exclusions: &ExclusionSet<'_>,
    ) -> Reconciliation {
        let mut document = derived;
        let mut outcome = Reconciliation {
            document: Value::Null,
            additions: Vec::new(),
            discrepancies: Vec::new(),
        };
        self.reconcile_node(&mut document, reference, &KeyPath::root(), exclusions, &mut outcome);
        outcome.document = document;
        outcome
    }

    fn reconcile_node(
        &self,
        derived: &mut Value,
        reference: &Value,
        path: &KeyPath,
        exclusions: &ExclusionSet<'_>,
        outcome: &mut Reconciliation,
    ) {
        let (derived_map, reference_map) = match (derived, reference) {
            (Value::Object(derived_map), Value::Object(reference_map)) => {
                (derived_map, reference_map)
            }
            (derived, reference) => {
                if derived.is_object() != reference.is_object() {
                    debug!(
                        file = %self.label,
                        path = %path,
                        "value shapes differ, leaving derived value untouched"
                    );
                }
                return;
            }
        };

        self.visit_derived_keys(derived_map, reference_map, path, exclusions, outcome);
        self.fill_missing_keys(derived_map, reference_map, path, exclusions, outcome);
    }

    fn visit_derived_keys(
        &self,
        derived_map: &mut Map<String, Value>,
        reference_map: &Map<String, Value>,
        path: &KeyPath,
        exclusions: &ExclusionSet<'_>,
        outcome: &mut Reconciliation,
    ) {
        for (key, value) in derived_map.iter_mut() {
            if exclusions.is_excluded(key) {
                debug!(file = %self.label, path = %path.child(key), "excluded");
                continue;
            }
            match reference_map.get(key) {
                Some(reference_value) => {
                    let next = exclusions.advance(key);
                    self.reconcile_node(value, reference_value, &path.child(key), &next, outcome);
                }
                None => self.report(
                    Discrepancy::NotInReference {
                        file: self.label.clone(),
                        path: path.child(key),
                    },
                    outcome,
                ),
            }
        }
    }

    fn fill_missing_keys(
        &self,
        derived_map: &mut Map<String, Value>,
        reference_map: &Map<String, Value>,
        path: &KeyPath,
        exclusions: &ExclusionSet<'_>,
        outcome: &mut Reconciliation,
    ) {
        for (key, reference_value) in reference_map {
            if derived_map.contains_key(key) || exclusions.is_excluded(key) {
                continue;
            }
            let child = path.child(key);
            if self.check_only {
                self.report(
                    Discrepancy::MissingFromDocument {
                        file: self.label.clone(),
                        path: child,
                    },
                    outcome,
                );
            } else {
                debug!(file = %self.label, path = %child, "copying key from reference");
                derived_map.insert(key.clone(), reference_value.clone());
                outcome.additions.push(child);
            }
        }
    }

    fn report(&self, discrepancy: Discrepancy, outcome: &mut Reconciliation) {
        self.reporter.warn(&discrepancy.to_string());
        outcome.discrepancies.push(discrepancy);
    }
}
