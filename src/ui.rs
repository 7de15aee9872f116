//! Rendering for nerd-ls.
//!
//! - [icons]: classifying entries into Nerd Font symbols
//! - [grid]: the default multi-column layout
//! - [long]: the `-l` detail listing

pub mod grid;
pub mod icons;
pub mod long;

pub use grid::{column_count, column_width, pack, render_compact};
pub use icons::{DIR_ICON, FILE_ICON, ICON_RULES, IconRule, classify, classify_name, iconify};
pub use long::{format_entry_line, render_long, total_blocks};
