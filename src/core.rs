//! Core listing logic for nerd-ls.
//!
//! This module contains the non-rendering pieces of the pipeline:
//! - [fm]: reading one directory into [DirectoryEntry] values (see [read_listing]).
//! - [formatter]: deterministic ordering and the long-format text formatters.
//! - [meta]: stat and identity extraction behind the [MetadataProvider] trait.
//! - [terminal]: terminal width probing with the default-width fallback.
//! - [error]: the error types surfaced by the pipeline.
//!
//! Most callers will import [read_listing], [sort_listing] and [PosixProvider] from here.

pub mod error;
pub mod fm;
pub mod formatter;
pub mod meta;
pub mod terminal;

pub use error::{DirectoryAccessError, EntryStatError, LookupError};
pub use fm::{DirectoryEntry, read_listing};
pub use formatter::{
    RECENT_WINDOW, compare_entries, format_mod_time, format_permissions, format_size,
    sort_entries, sort_listing,
};
pub use meta::{Metadata, MetadataProvider, PosixProvider, RawStat, extract};
pub use terminal::{DEFAULT_WIDTH, MIN_USABLE_WIDTH, effective_width, probe_width};
