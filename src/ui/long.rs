//! Long-format rendering (`ls -l`).
//!
//! Emits a `total <N>` header with the block usage in 1K units, then one detail line per entry.
//! An entry whose metadata cannot be read gets an error line instead and is left out of the
//! total; the rest of the listing is unaffected.

use crate::config::Display;
use crate::core::{DirectoryEntry, Metadata, MetadataProvider, extract, format_size};
use crate::ui::icons::iconify;

use std::io::{self, Write};
use std::time::SystemTime;

/// Sum of 512-byte blocks over the entries that could be stat'ed, in 1024-byte units.
pub fn total_blocks<P: MetadataProvider + ?Sized>(
    provider: &P,
    entries: &[DirectoryEntry],
) -> u64 {
    let blocks: u64 = entries
        .iter()
        .filter_map(|e| provider.stat(e).ok())
        .map(|raw| raw.blocks)
        .sum();
    blocks / 2
}

/// One detail line, without the trailing newline.
pub fn format_entry_line(entry: &DirectoryEntry, md: &Metadata, display: &Display) -> String {
    format!(
        "{} {} {} {} {} {} {}",
        md.permissions(),
        md.nlink(),
        md.owner(),
        md.group(),
        format_size(md.size(), display.human_readable()),
        md.modified_display(),
        iconify(entry, display.icons()),
    )
}

/// Writes the long listing of already sorted `entries`.
///
/// The time column of each line is computed against the clock at the moment that line is
/// rendered.
pub fn render_long<W: Write, P: MetadataProvider + ?Sized>(
    out: &mut W,
    provider: &P,
    entries: &[DirectoryEntry],
    display: &Display,
) -> io::Result<()> {
    writeln!(out, "total {}", total_blocks(provider, entries))?;

    for entry in entries {
        match extract(provider, entry, SystemTime::now()) {
            Ok(md) => writeln!(out, "{}", format_entry_line(entry, &md, display))?,
            Err(e) => {
                log::debug!("stat failed: {e}");
                writeln!(out, "ls: {e}")?;
            }
        }
    }
    out.flush()
}
