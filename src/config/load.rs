//! The main config loading module for nerd-ls.
//!
//! Handles loading and deserializing settings from `nerd-ls.toml`.
//!
//! A missing file is normal and silently yields the defaults; a file that cannot be read or
//! parsed is logged and also yields the defaults. Configuration never stops a listing.

use crate::config::Display;
use crate::utils::get_home;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration struct for nerd-ls, deserialized directly from the toml file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    display: Display,
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// Called by the entry point once at startup.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from `path`, falling back to defaults on any problem.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Config>(&content) {
                Ok(config) => {
                    log::debug!("loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("error parsing config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("cannot read config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    // Getters

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Determine the default configuration file path.
    /// Checks the NERD_LS_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/nerd-ls/nerd-ls.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("NERD_LS_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("nerd-ls/nerd-ls.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/nerd-ls/nerd-ls.toml");
        }
        PathBuf::from("nerd-ls.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let config = Config::load_from(&dir.path().join("absent.toml"));
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn reads_display_table() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("nerd-ls.toml");
        fs::write(&path, "[display]\nicons = false\ndefault_width = 100\n")?;

        let config = Config::load_from(&path);
        assert!(!config.display().icons());
        assert_eq!(config.display().default_width(), 100);
        assert_eq!(config.display().min_width(), 20);
        Ok(())
    }

    #[test]
    fn invalid_file_gives_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("nerd-ls.toml");
        fs::write(&path, "[display\nicons = maybe")?;

        assert_eq!(Config::load_from(&path), Config::default());
        Ok(())
    }
}
