//! Configuration for nerd-ls.
//!
//! - [load]: locating and parsing `nerd-ls.toml` into [Config]
//! - [display]: the `[display]` table

pub mod display;
pub mod load;

pub use display::Display;
pub use load::Config;
