//! Dashboard configuration model.
//!
//! Every field has a default so a partial (or absent) `config.toml` is valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SOURCE_URL: &str = "https://dummyjson.com/users";
pub const DEFAULT_SOURCE_LIMIT: u32 = 20;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_NAMESPACE: &str = "hr-dashboard-storage";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Remote employee listing endpoint.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SourceConfig {
    pub base_url: String,
    /// Value of the `limit` query parameter
    pub limit: u32,
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SOURCE_URL.to_string(),
            limit: DEFAULT_SOURCE_LIMIT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Durable local storage settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Key under which the persisted state object is stored
    pub namespace: String,
    /// Overrides the platform data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            state_dir: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardConfig {
    pub log_level: String,
    pub source: SourceConfig,
    pub storage: StorageConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            source: SourceConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}
