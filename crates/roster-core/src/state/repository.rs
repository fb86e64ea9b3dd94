//! State repository trait.

use crate::error::Result;
use crate::state::model::AppState;

/// Repository for the persisted slice of dashboard state.
///
/// Calls are synchronous: a write completes before the mutation that caused
/// it returns, mirroring browser local storage. Callers treat failures as
/// non-fatal.
pub trait StateRepository: Send + Sync {
    /// Loads the persisted state.
    ///
    /// A missing or corrupt entry yields `Ok(AppState::default())`; `Err` is
    /// reserved for the backing store itself being unreadable.
    fn load(&self) -> Result<AppState>;

    /// Saves the persisted state, replacing what was stored.
    fn save(&self, state: &AppState) -> Result<()>;
}
