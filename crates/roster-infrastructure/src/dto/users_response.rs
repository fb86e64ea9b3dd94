//! Envelope of the remote users listing.

use serde::Deserialize;

use roster_core::employee::RemoteUserRecord;

/// Body of `GET <base_url>?limit=N`.
///
/// Only `users` is required; the paging counters are informational.
#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<RemoteUserRecord>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}
