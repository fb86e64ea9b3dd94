//! Dashboard state domain models.
//!
//! [`AppState`] is the slice that persists across sessions. [`DashboardState`]
//! is the full aggregate snapshot, which additionally carries the roster
//! and its load status; those are re-fetched every session and never stored.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::bookmark::BookmarkSet;
use crate::employee::Employee;
use crate::filter::FilterState;

/// UI colour theme.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Application state that persists across restarts.
///
/// Each slice defaults independently: no bookmarks, light theme, neutral
/// filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub bookmarks: BookmarkSet,
    pub theme: Theme,
    pub filter: FilterState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Lifecycle of the one-shot roster fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "camelCase")]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    /// Terminal for the session; a reload is the only recovery
    Failed(String),
}

impl LoadStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Aggregate snapshot handed to readers. Immutable once published.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub employees: Vec<Employee>,
    pub load_status: LoadStatus,
    pub bookmarks: BookmarkSet,
    pub theme: Theme,
    pub filter: FilterState,
}

impl DashboardState {
    /// Starts a session from persisted state with an empty, idle roster.
    pub fn from_persisted(app_state: AppState) -> Self {
        Self {
            employees: Vec::new(),
            load_status: LoadStatus::Idle,
            bookmarks: app_state.bookmarks,
            theme: app_state.theme,
            filter: app_state.filter,
        }
    }

    /// The persistable slice of this snapshot.
    pub fn persisted(&self) -> AppState {
        AppState {
            bookmarks: self.bookmarks.clone(),
            theme: self.theme,
            filter: self.filter.clone(),
        }
    }
}
