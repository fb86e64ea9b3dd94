//! Configuration loading.
//!
//! Priority: environment variables > config.toml > built-in defaults.

use std::path::PathBuf;

use roster_core::config::DashboardConfig;
use roster_core::error::{Result, RosterError};

use crate::paths::RosterPaths;
use crate::storage::AtomicFile;

pub const ENV_SOURCE_URL: &str = "ROSTER_SOURCE_URL";
pub const ENV_STATE_DIR: &str = "ROSTER_STATE_DIR";

/// Reads and writes `config.toml`.
pub struct ConfigService {
    file: AtomicFile,
}

impl ConfigService {
    pub fn new(paths: &RosterPaths) -> Result<Self> {
        Ok(Self::with_path(paths.config_file()?))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            file: AtomicFile::new(path),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }

    /// Loads the config file, or defaults when it does not exist.
    ///
    /// A file that exists but does not parse is a `Config` error.
    pub fn load_file(&self) -> Result<DashboardConfig> {
        match self.file.read()? {
            None => Ok(DashboardConfig::default()),
            Some(content) => toml::from_str(&content).map_err(|e| {
                RosterError::config(format!(
                    "Failed to parse {}: {}",
                    self.file.path().display(),
                    e
                ))
            }),
        }
    }

    /// Loads the file and applies environment overrides.
    pub fn load(&self) -> Result<DashboardConfig> {
        let config = self.load_file()?;
        Ok(apply_overrides(config, |key| std::env::var(key).ok()))
    }

    /// Writes `config` atomically, replacing any existing file.
    pub fn save(&self, config: &DashboardConfig) -> Result<()> {
        let text = toml::to_string_pretty(config)?;
        self.file.write(&text)
    }

    /// Writes the defaults unless a config file already exists.
    ///
    /// Returns true when a file was written.
    pub fn init(&self) -> Result<bool> {
        if self.file.path().exists() {
            return Ok(false);
        }
        self.save(&DashboardConfig::default())?;
        tracing::info!("[ConfigService] Wrote default config to {:?}", self.file.path());
        Ok(true)
    }
}

fn apply_overrides(
    mut config: DashboardConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> DashboardConfig {
    if let Some(url) = lookup(ENV_SOURCE_URL).filter(|v| !v.trim().is_empty()) {
        tracing::debug!("[ConfigService] {} overrides source url", ENV_SOURCE_URL);
        config.source.base_url = url;
    }
    if let Some(dir) = lookup(ENV_STATE_DIR).filter(|v| !v.trim().is_empty()) {
        tracing::debug!("[ConfigService] {} overrides state dir", ENV_STATE_DIR);
        config.storage.state_dir = Some(PathBuf::from(dir));
    }
    config
}
