//! Employee repository operations: loading the remote roster and building
//! locally created employees.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use roster_core::employee::synthesis;
use roster_core::employee::{Employee, EmployeeSource, NewEmployee, RemoteUserRecord};
use roster_core::error::Result;
use roster_core::random::{RandomSource, ThreadRandom};

/// Synthesizes roster entries, drawing department and rating from an
/// injected [`RandomSource`].
pub struct RosterService {
    random: Mutex<Box<dyn RandomSource>>,
}

impl Default for RosterService {
    fn default() -> Self {
        Self::new(Box::new(ThreadRandom))
    }
}

impl RosterService {
    pub fn new(random: Box<dyn RandomSource>) -> Self {
        Self {
            random: Mutex::new(random),
        }
    }

    /// Fetches from `source` and maps the records into employees.
    ///
    /// Any source failure is returned unchanged (a `Fetch` error for the
    /// HTTP source).
    pub async fn fetch(&self, source: &dyn EmployeeSource) -> Result<Vec<Employee>> {
        let records = source.fetch_users().await?;
        Ok(self.load(records))
    }

    /// Maps remote records into employees in source order.
    ///
    /// Records with id 0 or repeating an earlier id are dropped so ids stay
    /// unique and positive.
    pub fn load(&self, records: Vec<RemoteUserRecord>) -> Vec<Employee> {
        let mut random = self.random.lock().unwrap_or_else(PoisonError::into_inner);
        let mut seen = HashSet::with_capacity(records.len());

        records
            .into_iter()
            .filter(|record| {
                if record.id == 0 {
                    tracing::warn!("[RosterService] Dropping remote record with id 0");
                    return false;
                }
                let fresh = seen.insert(record.id);
                if !fresh {
                    tracing::warn!(
                        "[RosterService] Dropping duplicate remote record id {}",
                        record.id
                    );
                }
                fresh
            })
            .map(|record| synthesis::from_remote(record, &mut **random))
            .collect()
    }

    /// Builds the employee for a validated candidate: next id after the
    /// roster's maximum, random rating, derived avatar.
    ///
    /// Does not append; the caller dispatches the result. Fails when the
    /// roster already holds the largest possible id.
    pub fn build(&self, roster: &[Employee], candidate: NewEmployee) -> Result<Employee> {
        let id = synthesis::next_id(roster)?;
        let mut random = self.random.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(synthesis::from_candidate(candidate, id, &mut **random))
    }
}
