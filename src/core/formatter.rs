//! Sorting and text formatting for directory entries in nerd-ls.
//!
//! Holds the deterministic entry ordering used before any rendering, and the pure
//! formatters that turn raw stat fields into the long-format columns:
//! permission strings, modification times and sizes.

use crate::core::DirectoryEntry;

use chrono::{DateTime, Local};
use humansize::BINARY;

use std::cmp::Ordering;
use std::time::{Duration, SystemTime};

/// Entries modified within this window show the time of day, older ones show the year.
pub const RECENT_WINDOW: Duration = Duration::from_secs(6 * 30 * 24 * 60 * 60);

/// Time-of-day form, e.g. `Mar  4 09:15`.
const RECENT_TIME_FORMAT: &str = "%b %e %H:%M";
/// Year form, e.g. `Mar  4 2021`.
const OLD_TIME_FORMAT: &str = "%b %e %Y";

/// Total order on entries: case-insensitive name first, then the raw name bytes so that names
/// differing only by case still compare deterministically.
pub fn compare_entries(a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
    a.lowercase_name()
        .cmp(b.lowercase_name())
        .then_with(|| a.name().cmp(b.name()))
}

/// Sorts the given entries in place by [compare_entries].
pub fn sort_entries(entries: &mut [DirectoryEntry]) {
    entries.sort_by(compare_entries);
}

/// Consumes an unordered listing and returns it in display order.
pub fn sort_listing(mut entries: Vec<DirectoryEntry>) -> Vec<DirectoryEntry> {
    sort_entries(&mut entries);
    entries
}

/// Formats the type indicator and permission bits in the unix `ls -l` style.
///
/// Only directories get a `d`; every other entry type gets `-`. Special bits (setuid, setgid,
/// sticky) are not shown.
///
/// # Returns
/// A 10 character string like `drwxr-xr-x`.
pub fn format_permissions(mode: u32, is_dir: bool) -> String {
    let first = if is_dir { 'd' } else { '-' };
    let mut chars = [first, '-', '-', '-', '-', '-', '-', '-', '-', '-'];
    let shifts = [6, 3, 0];
    for (i, &shift) in shifts.iter().enumerate() {
        let base = 1 + i * 3;
        if (mode >> (shift + 2)) & 1u32 != 0 {
            chars[base] = 'r';
        }
        if (mode >> (shift + 1)) & 1u32 != 0 {
            chars[base + 1] = 'w';
        }
        if (mode >> shift) & 1u32 != 0 {
            chars[base + 2] = 'x';
        }
    }
    chars.iter().collect()
}

/// True when `modified` lies strictly further in the past than [RECENT_WINDOW] from `now`.
///
/// Timestamps in the future count as recent.
pub fn is_older_than_window(modified: SystemTime, now: SystemTime) -> bool {
    match now.duration_since(modified) {
        Ok(age) => age > RECENT_WINDOW,
        Err(_) => false,
    }
}

/// Formats a modification time relative to `now`, in local time.
///
/// # Returns
/// `Mon dd HH:MM` for recent entries, `Mon dd YYYY` otherwise.
pub fn format_mod_time(modified: SystemTime, now: SystemTime) -> String {
    let dt: DateTime<Local> = DateTime::from(modified);
    let fmt = if is_older_than_window(modified, now) {
        OLD_TIME_FORMAT
    } else {
        RECENT_TIME_FORMAT
    };
    dt.format(fmt).to_string()
}

/// Formats a byte count right-aligned to a minimum width of 4.
///
/// With `human_readable` the count is rendered in binary units (KiB, MiB, ...).
pub fn format_size(size: u64, human_readable: bool) -> String {
    if human_readable {
        format!("{:>4}", format_size_human(size))
    } else {
        format!("{:>4}", size)
    }
}

fn format_size_human(size: u64) -> String {
    humansize::format_size(size, BINARY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::path::PathBuf;

    fn entry(name: &str) -> DirectoryEntry {
        DirectoryEntry::new(OsString::from(name), false, PathBuf::from(name))
    }

    fn names(entries: &[DirectoryEntry]) -> Vec<String> {
        entries.iter().map(|e| e.name_str().into_owned()).collect()
    }

    #[test]
    fn sorts_case_insensitively() {
        let sorted = sort_listing(vec![entry("b.TXT"), entry("D"), entry("A.md"), entry("c")]);
        assert_eq!(names(&sorted), ["A.md", "b.TXT", "c", "D"]);
    }

    #[test]
    fn case_only_differences_break_by_bytes() {
        let sorted = sort_listing(vec![entry("readme"), entry("README"), entry("ReadMe")]);
        assert_eq!(names(&sorted), ["README", "ReadMe", "readme"]);
    }

    #[test]
    fn permissions_for_file_and_dir() {
        assert_eq!(format_permissions(0o100644, false), "-rw-r--r--");
        assert_eq!(format_permissions(0o040755, true), "drwxr-xr-x");
        assert_eq!(format_permissions(0o000, false), "----------");
        assert_eq!(format_permissions(0o777, false), "-rwxrwxrwx");
    }

    #[test]
    fn special_bits_are_hidden() {
        assert_eq!(format_permissions(0o104755, false), "-rwxr-xr-x");
        assert_eq!(format_permissions(0o041777, true), "drwxrwxrwx");
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let now = SystemTime::now();
        let at_boundary = now - RECENT_WINDOW;
        let past_boundary = at_boundary - Duration::from_secs(1);

        assert!(!is_older_than_window(at_boundary, now));
        assert!(is_older_than_window(past_boundary, now));
        assert!(!is_older_than_window(now + Duration::from_secs(3600), now));
    }

    #[test]
    fn mod_time_switches_format_at_window() {
        let now = SystemTime::now();

        let recent = format_mod_time(now - Duration::from_secs(60), now);
        assert!(recent.contains(':'), "expected time of day, got {recent:?}");

        let old = format_mod_time(now - RECENT_WINDOW - Duration::from_secs(60), now);
        assert!(!old.contains(':'), "expected a year, got {old:?}");
        let year = old.rsplit(' ').next().unwrap_or_default();
        assert_eq!(year.len(), 4);
        assert!(year.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn mod_time_pads_day_to_two_columns() {
        let now = SystemTime::now();
        let s = format_mod_time(now, now);
        // "Mon dd HH:MM"
        assert_eq!(s.chars().count(), 12, "unexpected layout {s:?}");
    }

    #[test]
    fn size_is_right_aligned_to_four() {
        assert_eq!(format_size(7, false), "   7");
        assert_eq!(format_size(12345, false), "12345");
        assert_eq!(format_size(0, true), " 0 B");
        assert_eq!(format_size(2048, true), "2 KiB");
    }
}
