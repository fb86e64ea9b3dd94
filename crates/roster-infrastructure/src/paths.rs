//! Unified path management for roster files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/roster/            # Config directory
//! └── config.toml              # Dashboard configuration
//!
//! ~/.local/share/roster/       # Data directory
//! └── storage/                 # Durable key-value entries
//!     └── hr-dashboard-storage.json
//! ```

use std::path::PathBuf;

use roster_core::error::{Result, RosterError};

const APP_DIR: &str = "roster";
const CONFIG_FILE: &str = "config.toml";
const STORAGE_DIR: &str = "storage";

/// Resolves platform directories, with optional overrides.
///
/// Overrides exist for tests and for the `state_dir` config key; when unset
/// the platform defaults from `dirs` are used.
#[derive(Debug, Clone, Default)]
pub struct RosterPaths {
    config_dir_override: Option<PathBuf>,
    storage_dir_override: Option<PathBuf>,
}

impl RosterPaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir_override = Some(dir.into());
        self
    }

    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir_override = Some(dir.into());
        self
    }

    /// Returns the roster configuration directory (e.g. `~/.config/roster/`).
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.config_dir_override {
            return Ok(dir.clone());
        }
        dirs::config_dir()
            .map(|d| d.join(APP_DIR))
            .ok_or_else(|| RosterError::config("Cannot determine config directory"))
    }

    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CONFIG_FILE))
    }

    /// Returns the directory holding durable key-value entries.
    pub fn storage_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.storage_dir_override {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|d| d.join(APP_DIR).join(STORAGE_DIR))
            .ok_or_else(|| RosterError::config("Cannot determine data directory"))
    }
}
