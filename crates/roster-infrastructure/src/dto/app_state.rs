//! Persisted AppState DTO.
//!
//! Wire shape of the single namespaced storage entry:
//!
//! ```json
//! {
//!   "bookmarks": [3, 7],
//!   "theme": "dark",
//!   "searchTerm": "emily",
//!   "departmentFilter": "Engineering",
//!   "ratingFilter": "All"
//! }
//! ```
//!
//! Every key is optional. Values that parse as JSON but name no valid
//! option fall back to that field's default.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use roster_core::bookmark::BookmarkSet;
use roster_core::employee::EmployeeId;
use roster_core::filter::{DepartmentFilter, FilterState, RatingFilter};
use roster_core::state::{AppState, Theme};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedStateDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmarks: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_filter: Option<String>,
}

fn parse_or_default<T>(field: &str, raw: Option<String>) -> T
where
    T: std::str::FromStr + Default,
{
    match raw {
        None => T::default(),
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "[PersistedState] Ignoring invalid {} value '{}', using default",
                field,
                raw
            );
            T::default()
        }),
    }
}

fn bookmark_id(value: &Value) -> Option<EmployeeId> {
    value
        .as_u64()
        .filter(|id| *id > 0)
        .and_then(|id| EmployeeId::try_from(id).ok())
}

impl PersistedStateDto {
    /// Converts to the domain model, defaulting anything absent or invalid.
    pub fn into_domain(self) -> AppState {
        let bookmarks: BookmarkSet = match self.bookmarks {
            None => BookmarkSet::new(),
            Some(values) => values
                .iter()
                .filter_map(|value| {
                    let id = bookmark_id(value);
                    if id.is_none() {
                        tracing::warn!("[PersistedState] Dropping invalid bookmark {}", value);
                    }
                    id
                })
                .collect(),
        };

        AppState {
            bookmarks,
            theme: parse_or_default::<Theme>("theme", self.theme),
            filter: FilterState {
                search_term: self.search_term.unwrap_or_default(),
                department_filter: parse_or_default::<DepartmentFilter>(
                    "departmentFilter",
                    self.department_filter,
                ),
                rating_filter: parse_or_default::<RatingFilter>("ratingFilter", self.rating_filter),
            },
        }
    }
}

impl From<&AppState> for PersistedStateDto {
    fn from(state: &AppState) -> Self {
        Self {
            bookmarks: Some(
                state
                    .bookmarks
                    .to_sorted_vec()
                    .into_iter()
                    .map(Value::from)
                    .collect(),
            ),
            theme: Some(state.theme.to_string()),
            search_term: Some(state.filter.search_term.clone()),
            department_filter: Some(state.filter.department_filter.to_string()),
            rating_filter: Some(state.filter.rating_filter.to_string()),
        }
    }
}
