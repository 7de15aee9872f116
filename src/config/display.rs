//! Display configuration options for nerd-ls
//!
//! This module defines the `[display]` table read from the nerd-ls.toml configuration file.

use crate::core::{DEFAULT_WIDTH, MIN_USABLE_WIDTH};
use crate::ui::grid::COLUMN_PADDING;

use serde::Deserialize;

/// Display configuration options
///
/// Controls icons, the grid width fallback, column padding and size formatting.
/// Every field has a default matching the built-in behaviour, so an empty or missing
/// file renders exactly like no configuration at all.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Display {
    icons: bool,
    default_width: usize,
    min_width: usize,
    column_padding: usize,
    human_readable: bool,
}

impl Display {
    pub fn icons(&self) -> bool {
        self.icons
    }

    /// Never zero.
    pub fn default_width(&self) -> usize {
        self.default_width.max(1)
    }

    /// Never zero.
    pub fn min_width(&self) -> usize {
        self.min_width.max(1)
    }

    pub fn column_padding(&self) -> usize {
        self.column_padding
    }

    pub fn human_readable(&self) -> bool {
        self.human_readable
    }
}

impl Default for Display {
    fn default() -> Self {
        Display {
            icons: true,
            default_width: DEFAULT_WIDTH,
            min_width: MIN_USABLE_WIDTH,
            column_padding: COLUMN_PADDING,
            human_readable: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_table_keeps_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let display: Display = toml::from_str("icons = false\nhuman_readable = true")?;
        assert!(!display.icons());
        assert!(display.human_readable());
        assert_eq!(display.default_width(), 80);
        assert_eq!(display.min_width(), 20);
        assert_eq!(display.column_padding(), 2);
        Ok(())
    }

    #[test]
    fn zero_widths_are_clamped() -> Result<(), Box<dyn std::error::Error>> {
        let display: Display = toml::from_str("default_width = 0\nmin_width = 0")?;
        assert_eq!(display.default_width(), 1);
        assert_eq!(display.min_width(), 1);
        Ok(())
    }
}
