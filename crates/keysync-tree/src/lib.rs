//! Tree reconciliation for keysync
//!
//! Compares a derived JSON document against a reference document, heals
//! keys missing from the derived side, and normalizes key order.
//!
//! ```
//! use keysync_tree::{ExclusionSet, RecordingReporter, Reconciler, normalize_order};
//! use serde_json::json;
//!
//! let reference = json!({"b": 1, "a": {"y": 2, "x": 3}});
//! let derived = json!({"a": {"x": 9}});
//!
//! let reporter = RecordingReporter::new();
//! let outcome = Reconciler::new("fr.json", &reporter).reconcile(derived, &reference, &ExclusionSet::empty());
//!
//! assert_eq!(normalize_order(outcome.document, 0), json!({"a": {"x": 9, "y": 2}, "b": 1}));
//! assert_eq!(outcome.additions.len(), 2);
//! ```

pub mod error;
pub mod exclusion;
pub mod order;
pub mod path;
pub mod reconcile;
pub mod report;

pub use error::{Error, Result};
pub use exclusion::ExclusionSet;
pub use order::normalize_order;
pub use path::{KeyPath, parse_path_list};
pub use reconcile::{Discrepancy, Reconciler, Reconciliation};
pub use report::{Level, RecordingReporter, Reporter, TracingReporter};
