//! Key path parsing and rendering
//!
//! A [`KeyPath`] names a location inside a nested document by the mapping
//! keys that lead to it. Paths are written as dot-separated text.
//!
//! # Path Syntax
//!
//! - Dot-separated keys: `app.menu.title`
//! - Comma-separated lists of paths: `app.menu.title, meta`
//!
//! # Examples
//!
//! ```
//! use keysync_tree::KeyPath;
//!
//! let path: KeyPath = "app.menu.title".parse().unwrap();
//! assert_eq!(path.segments(), ["app", "menu", "title"]);
//! assert_eq!(path.to_string(), "app.menu.title");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::{Error, Result};

/// An ordered sequence of mapping keys.
///
/// The empty path is the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// The path of the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from already split segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Path of `key` nested directly under this path.
    pub fn child(&self, key: &str) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(key.to_string());
        Self { segments }
    }
}

impl FromStr for KeyPath {
    type Err = Error;

    /// Parse a dot-separated path.
    ///
    /// Fails on empty input and on empty segments (`a..b`, `.a`, `a.`).
    fn from_str(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Err(Error::invalid_path(path, "path is empty"));
        }
        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(Error::invalid_path(path, "path contains an empty segment"));
        }
        Ok(Self { segments })
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl Serialize for KeyPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a comma-separated list of dot-separated paths.
///
/// Whitespace around the commas is ignored. Blank input yields no paths;
/// an empty entry anywhere else (`a,,b`, `a,`) is an error.
///
/// # Examples
///
/// ```
/// use keysync_tree::{KeyPath, parse_path_list};
///
/// let paths = parse_path_list("meta.generated , plurals").unwrap();
/// assert_eq!(paths, vec![
///     KeyPath::new(["meta", "generated"]),
///     KeyPath::new(["plurals"]),
/// ]);
/// ```
pub fn parse_path_list(list: &str) -> Result<Vec<KeyPath>> {
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }
    list.split(',').map(|entry| entry.trim().parse()).collect()
}
