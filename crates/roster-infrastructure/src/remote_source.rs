//! HTTP implementation of the remote employee source.
//!
//! One `GET <base_url>?limit=N` per call, no authentication, no paging and
//! no retry.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use roster_core::config::SourceConfig;
use roster_core::employee::{EmployeeSource, RemoteUserRecord};
use roster_core::error::{Result, RosterError};

use crate::dto::UsersResponse;

/// Fetches the users listing over HTTP.
#[derive(Clone)]
pub struct HttpEmployeeSource {
    client: Client,
    base_url: String,
    limit: u32,
    timeout: Duration,
}

impl HttpEmployeeSource {
    pub fn new(base_url: impl Into<String>, limit: u32) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            limit,
            timeout: Duration::from_secs(roster_core::config::DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(config.base_url.clone(), config.limit)
            .with_timeout(Duration::from_secs(config.timeout_secs))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl EmployeeSource for HttpEmployeeSource {
    async fn fetch_users(&self) -> Result<Vec<RemoteUserRecord>> {
        tracing::info!(
            "[EmployeeSource] GET {} (limit={})",
            self.base_url,
            self.limit
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("limit", self.limit)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| RosterError::fetch(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RosterError::fetch(format!(
                "Unexpected status {} from {}",
                status, self.base_url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RosterError::fetch(format!("Failed to read response body: {}", e)))?;

        let parsed: UsersResponse = serde_json::from_str(&body)
            .map_err(|e| RosterError::fetch(format!("Malformed users payload: {}", e)))?;

        tracing::info!(
            "[EmployeeSource] Received {} users (total={:?}, limit={:?})",
            parsed.users.len(),
            parsed.total,
            parsed.limit
        );

        Ok(parsed.users)
    }
}
