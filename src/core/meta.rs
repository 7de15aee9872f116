//! Per-entry metadata extraction.
//!
//! The raw stat fields and the identity lookups are behind the [MetadataProvider] trait so the
//! rendering code can run against a fake without touching the filesystem. [PosixProvider] is
//! the real implementation, backed by `lstat` and the system user/group databases.

use crate::core::DirectoryEntry;
use crate::core::error::{EntryStatError, LookupError};
use crate::core::formatter::{format_mod_time, format_permissions};

use std::fs;
use std::os::unix::fs::MetadataExt;
use std::time::SystemTime;

/// Stat-equivalent fields for one entry, straight from the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStat {
    pub mode: u32,
    pub is_dir: bool,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    /// Allocated 512-byte blocks.
    pub blocks: u64,
    pub modified: SystemTime,
}

/// Source of raw entry metadata and identity names.
pub trait MetadataProvider {
    fn stat(&self, entry: &DirectoryEntry) -> Result<RawStat, EntryStatError>;

    fn user_name(&self, uid: u32) -> Result<String, LookupError>;

    fn group_name(&self, gid: u32) -> Result<String, LookupError>;
}

/// [MetadataProvider] backed by `lstat` and the passwd/group databases.
#[derive(Debug, Default, Clone, Copy)]
pub struct PosixProvider;

impl MetadataProvider for PosixProvider {
    fn stat(&self, entry: &DirectoryEntry) -> Result<RawStat, EntryStatError> {
        let md = fs::symlink_metadata(entry.path())
            .map_err(|e| EntryStatError::new(entry.name(), e))?;
        let modified = md
            .modified()
            .map_err(|e| EntryStatError::new(entry.name(), e))?;

        Ok(RawStat {
            mode: md.mode(),
            is_dir: md.is_dir(),
            nlink: md.nlink(),
            uid: md.uid(),
            gid: md.gid(),
            size: md.size(),
            blocks: md.blocks(),
            modified,
        })
    }

    fn user_name(&self, uid: u32) -> Result<String, LookupError> {
        uzers::get_user_by_uid(uid)
            .map(|u| u.name().to_string_lossy().into_owned())
            .ok_or(LookupError::Owner(uid))
    }

    fn group_name(&self, gid: u32) -> Result<String, LookupError> {
        uzers::get_group_by_gid(gid)
            .map(|g| g.name().to_string_lossy().into_owned())
            .ok_or(LookupError::Group(gid))
    }
}

/// Display-ready metadata of one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    permissions: String,
    nlink: u64,
    owner: String,
    group: String,
    size: u64,
    blocks: u64,
    modified: SystemTime,
    modified_display: String,
}

impl Metadata {
    // Accessors

    #[inline]
    pub fn permissions(&self) -> &str {
        &self.permissions
    }

    #[inline]
    pub fn nlink(&self) -> u64 {
        self.nlink
    }

    #[inline]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[inline]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn blocks(&self) -> u64 {
        self.blocks
    }

    #[inline]
    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    #[inline]
    pub fn modified_display(&self) -> &str {
        &self.modified_display
    }
}

/// Resolves a name, degrading to the numeric id when the lookup fails.
fn name_or_id(lookup: Result<String, LookupError>, id: u32) -> String {
    lookup.unwrap_or_else(|e| {
        log::debug!("{e}, showing numeric id");
        id.to_string()
    })
}

/// Extracts the display metadata of `entry`, with the time column computed against `now`.
///
/// Only a failed stat is an error. Unresolvable owners and groups fall back to their numeric ids.
pub fn extract<P: MetadataProvider + ?Sized>(
    provider: &P,
    entry: &DirectoryEntry,
    now: SystemTime,
) -> Result<Metadata, EntryStatError> {
    let raw = provider.stat(entry)?;

    Ok(Metadata {
        permissions: format_permissions(raw.mode, raw.is_dir),
        nlink: raw.nlink,
        owner: name_or_id(provider.user_name(raw.uid), raw.uid),
        group: name_or_id(provider.group_name(raw.gid), raw.gid),
        size: raw.size,
        blocks: raw.blocks,
        modified: raw.modified,
        modified_display: format_mod_time(raw.modified, now),
    })
}
