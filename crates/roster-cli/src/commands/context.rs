use std::sync::Arc;

use anyhow::Result;

use roster_application::{Dashboard, RosterService, StateContainer};
use roster_core::config::DashboardConfig;
use roster_infrastructure::{HttpEmployeeSource, KeyValueStateRepository, RosterPaths};

/// Everything a command needs, wired from the effective config.
pub struct AppContext {
    config: DashboardConfig,
    container: Arc<StateContainer>,
    dashboard: Dashboard,
    source: HttpEmployeeSource,
}

impl AppContext {
    pub fn open(config: DashboardConfig, paths: RosterPaths) -> Result<Self> {
        let repository =
            KeyValueStateRepository::file_backed(&paths, config.storage.namespace.clone())?;
        let container = Arc::new(StateContainer::new(Arc::new(repository)));
        let dashboard = Dashboard::new(Arc::clone(&container), RosterService::default());
        let source = HttpEmployeeSource::from_config(&config.source);

        Ok(Self {
            config,
            container,
            dashboard,
            source,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn container(&self) -> &Arc<StateContainer> {
        &self.container
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Fetches the roster for commands that read it.
    pub async fn load_roster(&self) -> Result<()> {
        tracing::debug!("[roster] Fetching roster from {}", self.source.base_url());
        self.dashboard.bootstrap(&self.source).await?;
        Ok(())
    }
}
