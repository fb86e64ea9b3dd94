//! Remote employee source trait.

use super::model::RemoteUserRecord;
use crate::error::Result;

/// Where the roster comes from at session start.
///
/// Implementations perform exactly one listing call per invocation and do
/// not retry. Transport failures and malformed payloads are both reported
/// as [`RosterError::Fetch`](crate::RosterError::Fetch).
#[async_trait::async_trait]
pub trait EmployeeSource: Send + Sync {
    /// Fetches the raw user records.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<RemoteUserRecord>)`: The records, in source order
    /// - `Err(RosterError::Fetch)`: The call failed or the body did not parse
    async fn fetch_users(&self) -> Result<Vec<RemoteUserRecord>>;
}
