//! [`LocaleDir`] builder for sync test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// A temporary directory of JSON locale documents.
///
/// # Example
///
/// ```rust
/// use keysync_test_utils::LocaleDir;
/// use serde_json::json;
///
/// let dir = LocaleDir::new()
///     .with_document("en.json", &json!({"hello": "Hello"}))
///     .with_document("fr.json", &json!({}));
/// assert_eq!(dir.read("en.json"), json!({"hello": "Hello"}));
/// ```
pub struct LocaleDir {
    temp_dir: TempDir,
}

impl Default for LocaleDir {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("LocaleDir::new: failed to create temp dir"),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `name` inside the directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Builder form of [`write`](Self::write).
    pub fn with_document(self, name: &str, document: &Value) -> Self {
        self.write(name, document);
        self
    }

    /// Write `document` as compact JSON, keeping its key order.
    pub fn write(&self, name: &str, document: &Value) {
        let text = serde_json::to_string(document).expect("LocaleDir::write: serialize");
        self.write_raw(name, &text);
    }

    /// Write arbitrary text, e.g. deliberately broken JSON.
    pub fn write_raw(&self, name: &str, content: &str) {
        fs::write(self.path(name), content)
            .unwrap_or_else(|e| panic!("LocaleDir::write_raw: failed to write {name}: {e}"));
    }

    /// Read and parse a document.
    pub fn read(&self, name: &str) -> Value {
        serde_json::from_str(&self.read_raw(name))
            .unwrap_or_else(|e| panic!("LocaleDir::read: {name} is not valid JSON: {e}"))
    }

    /// Read a file's text unchanged.
    pub fn read_raw(&self, name: &str) -> String {
        fs::read_to_string(self.path(name))
            .unwrap_or_else(|e| panic!("LocaleDir::read_raw: failed to read {name}: {e}"))
    }

    /// Keys of the mapping at JSON `pointer` in document `name`, in file order.
    pub fn keys_at(&self, name: &str, pointer: &str) -> Vec<String> {
        self.read(name)
            .pointer(pointer)
            .and_then(Value::as_object)
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_else(|| panic!("LocaleDir::keys_at: no mapping at {pointer} in {name}"))
    }
}
