//! Atomic file replacement and text helpers

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::{Error, NormalizedPath, Result};

/// Replace the file at `path` with `content`.
///
/// The bytes go to a staging file next to the target, which is locked,
/// flushed to disk and then renamed over the target. Readers see either the
/// old file or the new one. The staging file is removed if any step fails.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let target = path.to_native();

    if let Some(dir) = target.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }

    let staging = staging_path(&target);
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&staging)
        .map_err(|e| Error::io(&staging, e))?;

    let outcome = fill_staging(file, &staging, &target, content)
        .and_then(|()| fs::rename(&staging, &target).map_err(|e| Error::io(&target, e)));

    if let Err(err) = outcome {
        if let Err(cleanup) = fs::remove_file(&staging) {
            debug!(path = %staging.display(), error = %cleanup, "could not remove staging file");
        }
        return Err(err);
    }

    debug!(path = %path, bytes = content.len(), "wrote file");
    Ok(())
}

/// `.<name>.<pid>.tmp` in the target's directory, so the rename never
/// crosses filesystems.
fn staging_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    target.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}

/// Write `content` under an exclusive lock and sync it. Consumes the handle
/// so the file is closed before it is renamed or removed.
fn fill_staging(mut file: File, staging: &Path, target: &Path, content: &[u8]) -> Result<()> {
    let lock_failed = |_: std::io::Error| Error::LockFailed {
        path: target.to_path_buf(),
    };

    file.lock_exclusive().map_err(lock_failed)?;
    file.write_all(content).map_err(|e| Error::io(staging, e))?;
    file.sync_all().map_err(|e| Error::io(staging, e))?;
    file.unlock().map_err(lock_failed)
}

/// Read a whole file as UTF-8 text.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native = path.to_native();
    fs::read_to_string(&native).map_err(|e| Error::io(&native, e))
}

/// Atomically replace a file with `content`.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
