//! State repository backed by a key-value store.

use std::sync::Arc;

use roster_core::error::{Result, RosterError};
use roster_core::state::{AppState, StateRepository};

use crate::dto::PersistedStateDto;
use crate::paths::RosterPaths;
use crate::storage::{FileKeyValueStore, KeyValueStore};

/// Stores [`AppState`] as one JSON object under a namespace key.
///
/// # Example
///
/// ```ignore
/// use roster_infrastructure::{InMemoryKeyValueStore, KeyValueStateRepository};
///
/// let repo = KeyValueStateRepository::new(Arc::new(InMemoryKeyValueStore::new()), "hr-dashboard-storage");
/// repo.save(&AppState::default())?;
/// ```
#[derive(Clone)]
pub struct KeyValueStateRepository {
    store: Arc<dyn KeyValueStore>,
    namespace: String,
}

impl KeyValueStateRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    /// File-backed repository in the platform (or overridden) storage dir.
    pub fn file_backed(paths: &RosterPaths, namespace: impl Into<String>) -> Result<Self> {
        let dir = paths.storage_dir()?;
        tracing::debug!("[StateRepository] Using storage dir {:?}", dir);
        Ok(Self::new(Arc::new(FileKeyValueStore::new(dir)), namespace))
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl StateRepository for KeyValueStateRepository {
    fn load(&self) -> Result<AppState> {
        let Some(raw) = self.store.get(&self.namespace)? else {
            tracing::debug!(
                "[StateRepository] No stored state under '{}', using defaults",
                self.namespace
            );
            return Ok(AppState::default());
        };

        match serde_json::from_str::<PersistedStateDto>(&raw) {
            Ok(dto) => Ok(dto.into_domain()),
            Err(e) => {
                tracing::warn!(
                    "[StateRepository] Stored state under '{}' is malformed ({}), using defaults",
                    self.namespace,
                    e
                );
                Ok(AppState::default())
            }
        }
    }

    fn save(&self, state: &AppState) -> Result<()> {
        let json = serde_json::to_string(&PersistedStateDto::from(state))
            .map_err(|e| RosterError::storage(format!("Failed to serialize state: {}", e)))?;
        self.store.set(&self.namespace, &json)
    }
}
