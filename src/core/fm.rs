//! Directory reading for nerd-ls.
//!
//! Provides the [DirectoryEntry] struct which flows through the whole listing pipeline,
//! and [read_listing] which produces the unordered entries of one directory.

use crate::core::error::DirectoryAccessError;

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A single direct child of the listed directory.
///
/// Holds the name, whether the entry is a directory, and the full path used to query
/// metadata lazily. Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    name: Box<OsStr>,
    lowercase_name: Box<str>,
    is_dir: bool,
    path: PathBuf,
}

impl DirectoryEntry {
    pub fn new(name: OsString, is_dir: bool, path: PathBuf) -> Self {
        let lowercase_name = name.to_string_lossy().to_lowercase().into_boxed_str();
        DirectoryEntry {
            name: name.into_boxed_os_str(),
            lowercase_name,
            is_dir,
            path,
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    /// Lowercased name, computed once at read time for case-insensitive sorting.
    #[inline]
    pub fn lowercase_name(&self) -> &str {
        &self.lowercase_name
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Reads every direct child of `path` without recursing.
///
/// The directory type comes from the entry itself, so a symlink pointing at a directory is not
/// reported as one. Any failure while opening or iterating the directory aborts the whole read:
/// no partial listing is returned.
///
/// # Returns
/// The unordered entries, or a [DirectoryAccessError] carrying the path and the cause.
pub fn read_listing(path: &Path) -> Result<Vec<DirectoryEntry>, DirectoryAccessError> {
    let access = |e: io::Error| DirectoryAccessError::new(path, e);
    let mut entries = Vec::with_capacity(64);

    for entry in fs::read_dir(path).map_err(access)? {
        let entry = entry.map_err(access)?;
        let is_dir = entry.file_type().map_err(access)?.is_dir();
        entries.push(DirectoryEntry::new(entry.file_name(), is_dir, entry.path()));
    }

    log::debug!("read {} entries from {}", entries.len(), path.display());
    Ok(entries)
}
