//! Error types for the listing pipeline.
//!
//! Only [DirectoryAccessError] is fatal to an invocation. [EntryStatError] is reported in place
//! of a single entry, and [LookupError] never leaves the metadata layer: it is always degraded to
//! the numeric id.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The target directory could not be opened or read.
#[derive(Error, Debug)]
#[error("cannot access '{}': {source}", .path.display())]
pub struct DirectoryAccessError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl DirectoryAccessError {
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    #[inline]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    #[inline]
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

/// Basic metadata for one entry could not be obtained.
#[derive(Error, Debug)]
#[error("error reading file info for {}: {source}", .name.to_string_lossy())]
pub struct EntryStatError {
    name: OsString,
    #[source]
    source: io::Error,
}

impl EntryStatError {
    pub fn new(name: impl Into<OsString>, source: io::Error) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    #[inline]
    pub fn name(&self) -> &OsString {
        &self.name
    }
}

/// A numeric id had no name in the user or group database.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    #[error("no user with uid {0}")]
    Owner(u32),
    #[error("no group with gid {0}")]
    Group(u32),
}
