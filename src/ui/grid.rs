//! Multi-column layout of entry names.
//!
//! Every column has the same width: the widest rendered name plus [COLUMN_PADDING]. Names are
//! laid out row-major, left-aligned and padded to the column width, and every row (including
//! the last, partial one) ends with a newline. Widths are measured in terminal cells.

use crate::config::Display;
use crate::core::DirectoryEntry;
use crate::ui::icons::iconify;

use unicode_width::UnicodeWidthStr;

use std::io::{self, Write};

/// Spaces added to the widest name to form a column.
pub const COLUMN_PADDING: usize = 2;

/// Width of one column for these names.
pub fn column_width<S: AsRef<str>>(names: &[S], padding: usize) -> usize {
    names
        .iter()
        .map(|n| UnicodeWidthStr::width(n.as_ref()))
        .max()
        .unwrap_or(0)
        + padding
}

/// How many columns of `column_width` fit in `terminal_width`. Never less than one.
pub fn column_count(terminal_width: usize, column_width: usize) -> usize {
    (terminal_width / column_width.max(1)).max(1)
}

/// Packs `names` into rows that fit `terminal_width`.
///
/// # Returns
/// The grid text, one `\n`-terminated line per row. Empty input yields an empty string.
pub fn pack<S: AsRef<str>>(names: &[S], terminal_width: usize, padding: usize) -> String {
    let col_width = column_width(names, padding);
    let cols = column_count(terminal_width, col_width);
    let mut out = String::with_capacity(names.len() * (col_width + 1));

    for (i, name) in names.iter().enumerate() {
        let name = name.as_ref();
        out.push_str(name);
        let w = UnicodeWidthStr::width(name);
        out.extend(std::iter::repeat_n(' ', col_width.saturating_sub(w)));

        if (i + 1) % cols == 0 || i == names.len() - 1 {
            out.push('\n');
        }
    }
    out
}

/// Writes the compact listing of already sorted `entries`.
pub fn render_compact<W: Write>(
    out: &mut W,
    entries: &[DirectoryEntry],
    terminal_width: usize,
    display: &Display,
) -> io::Result<()> {
    let names: Vec<String> = entries
        .iter()
        .map(|e| iconify(e, display.icons()))
        .collect();
    out.write_all(pack(&names, terminal_width, display.column_padding()).as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eighty_columns_of_twelve_gives_six() {
        let names = ["abcdefghij", "a"];
        let width = column_width(&names, COLUMN_PADDING);
        assert_eq!(width, 12);
        assert_eq!(column_count(80, width), 6);
    }

    #[test]
    fn column_count_never_zero() {
        assert_eq!(column_count(20, 200), 1);
        assert_eq!(column_count(0, 12), 1);
        assert_eq!(column_count(80, 0), 80);
    }

    #[test]
    fn rows_break_after_every_nth_and_at_end() {
        let names = ["aa", "bb", "cc", "dd", "ee"];
        // column width 4, terminal 8 => 2 per row
        let text = pack(&names, 8, 2);
        assert_eq!(text, "aa  bb  \ncc  dd  \nee  \n");
    }

    #[test]
    fn full_last_row_gets_single_newline() {
        let text = pack(&["a", "b"], 6, 2);
        assert_eq!(text, "a  b  \n");
    }

    #[test]
    fn overlong_names_get_one_column() {
        let long = "x".repeat(100);
        let text = pack(&[long.as_str(), "y"], 80, 2);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(&long));
        assert_eq!(lines[1].trim_end(), "y");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(pack::<&str>(&[], 80, 2), "");
    }

    #[test]
    fn padding_counts_display_cells() {
        // "日本" is four cells wide; "ab" two.
        let text = pack(&["日本", "ab"], 80, 2);
        assert_eq!(text, "日本  ab    \n");
    }
}
