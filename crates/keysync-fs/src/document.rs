//! JSON document loading, saving and discovery
//!
//! Documents are written pretty-printed with one tab per indentation level
//! and no trailing newline.

use std::fs;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::{Error, NormalizedPath, Result, io};

/// File extension of the documents keysync manages
pub const DOCUMENT_EXTENSION: &str = "json";

/// List the documents in `directory`.
///
/// Returns the regular files whose extension is `json` (any case), sorted
/// by file name. Subdirectories and other files are skipped.
pub fn list_documents(directory: &NormalizedPath) -> Result<Vec<NormalizedPath>> {
    let native = directory.to_native();
    if !directory.is_dir() {
        return Err(Error::NotADirectory { path: native });
    }

    let entries = fs::read_dir(&native).map_err(|e| Error::io(&native, e))?;
    let mut documents = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&native, e))?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let path = directory.join(&file_name);

        let is_document = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION));
        if is_document && path.is_file() {
            documents.push(path);
        } else {
            debug!(path = %path, "skipping non-document entry");
        }
    }

    documents.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(documents)
}

/// Read and parse a JSON document.
///
/// Syntax errors carry the resolved absolute path of the offending file.
pub fn load_document(path: &NormalizedPath) -> Result<Value> {
    let content = io::read_text(path)?;
    let document = serde_json::from_str(&content).map_err(|e| Error::DocumentParse {
        path: path.resolved(),
        message: e.to_string(),
    })?;
    debug!(path = %path, "loaded document");
    Ok(document)
}

/// Serialize `document` and replace the file at `path` with it.
pub fn save_document(path: &NormalizedPath, document: &Value) -> Result<()> {
    let content = to_pretty_json(document).map_err(|e| Error::DocumentSerialize {
        path: path.to_native(),
        message: e.to_string(),
    })?;
    io::write_text(path, &content)
}

/// Render `document` as tab-indented JSON text.
pub fn to_pretty_json(document: &Value) -> serde_json::Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"\t"));
    document.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(serde::ser::Error::custom)
}
