//! Internal library crate for nerd-ls.
//!
//! The shipped application is the `ls` binary (`src/main.rs`).
//!
//! The pipeline for one invocation is: [core::read_listing] → [core::sort_listing] → either
//! [ui::render_compact] or [ui::render_long]. Everything is created fresh per invocation.
//!
//! This library exists to share code between targets (binary, tests) and to keep modules organized.

pub mod config;
pub mod core;
pub mod ui;
pub mod utils;
