//! Miscellaneous utility functions for nerd-ls.
//!
//! - [cli]: parsing of `ls [-l] [path]`
//! - [helpers]: stack lowercasing and home directory lookup

pub mod cli;
pub mod helpers;

pub use helpers::{get_home, with_lowered_stack};
