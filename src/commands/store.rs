//! JSON file store for the streak book
//!
//! Saves replace the file atomically, so readers never see a torn file.
//! Writers must additionally hold a [`StoreLock`] from load to save; without
//! it two processes that load the same book both save, and the later rename
//! silently discards the other's change.

use crate::streak::StreakBook;
use anyhow::{Context, Result};
use fs2::FileExt;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Exclusive hold on a store, released on drop
#[derive(Debug)]
pub struct StoreLock {
    file: File,
    path: PathBuf,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to release store lock");
        }
    }
}

/// `<store><suffix>` next to the store itself
fn sidecar(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Block until this process is the only writer of the store at `path`
///
/// The lock lives on a `.lock` sidecar file rather than the store, because
/// saving replaces the store's inode.
///
/// # Errors
///
/// Returns an error if the lock file cannot be created or locked.
pub fn lock_store(path: &Path) -> Result<StoreLock> {
    let lock_path = sidecar(path, ".lock");
    let file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(&lock_path)
        .with_context(|| format!("Failed to open {}", lock_path.display()))?;
    file.lock_exclusive()
        .with_context(|| format!("Failed to lock {}", lock_path.display()))?;

    tracing::trace!(path = %lock_path.display(), "store locked");
    Ok(StoreLock {
        file,
        path: lock_path,
    })
}

/// Load the book at `path`
///
/// A missing file is an empty book.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or holds
/// a record that breaks the streak invariants.
pub fn load_book(path: &Path) -> Result<StreakBook> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no store yet, starting empty");
            return Ok(StreakBook::new());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    let book: StreakBook = serde_json::from_str(&content)
        .with_context(|| format!("Invalid streak store {}", path.display()))?;
    tracing::debug!(path = %path.display(), records = book.len(), "store loaded");
    Ok(book)
}

/// Write the book to `path`, replacing it atomically
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_book(path: &Path, book: &StreakBook) -> Result<()> {
    let json = serde_json::to_string_pretty(book).context("Failed to encode streak store")?;

    let tmp = sidecar(path, ".tmp");
    fs::write(&tmp, json).with_context(|| format!("Failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("Failed to replace {}", path.display()))?;

    tracing::debug!(path = %path.display(), records = book.len(), "store saved");
    Ok(())
}
