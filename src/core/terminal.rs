//! Terminal width detection for the compact layout.

/// Width used when the terminal cannot be probed or is too narrow.
pub const DEFAULT_WIDTH: usize = 80;
/// Probed widths below this are treated as unusable.
pub const MIN_USABLE_WIDTH: usize = 20;

/// Asks the terminal for its column count.
///
/// Returns `None` when output is not attached to a terminal or the query fails.
pub fn probe_width() -> Option<usize> {
    match crossterm::terminal::size() {
        Ok((cols, _rows)) => Some(cols as usize),
        Err(e) => {
            log::debug!("terminal size unavailable: {e}");
            None
        }
    }
}

/// Picks the width to lay out against from a probe result.
///
/// Falls back to `default_width` when the probe failed or reported fewer than `min_width` columns.
pub fn effective_width(probed: Option<usize>, min_width: usize, default_width: usize) -> usize {
    match probed {
        Some(w) if w >= min_width => w,
        other => {
            log::debug!("using default width {default_width} (probed {other:?})");
            default_width
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_terminal_falls_back() {
        assert_eq!(effective_width(Some(15), MIN_USABLE_WIDTH, DEFAULT_WIDTH), 80);
        assert_eq!(effective_width(Some(0), MIN_USABLE_WIDTH, DEFAULT_WIDTH), 80);
    }

    #[test]
    fn failed_probe_falls_back() {
        assert_eq!(effective_width(None, MIN_USABLE_WIDTH, DEFAULT_WIDTH), 80);
    }

    #[test]
    fn usable_width_is_kept() {
        assert_eq!(effective_width(Some(20), MIN_USABLE_WIDTH, DEFAULT_WIDTH), 20);
        assert_eq!(effective_width(Some(132), MIN_USABLE_WIDTH, DEFAULT_WIDTH), 132);
    }
}
