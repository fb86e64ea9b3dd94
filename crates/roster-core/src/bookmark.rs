//! Bookmarked employee identifiers.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::employee::EmployeeId;

/// Set of bookmarked employee ids.
///
/// Inserting an id twice keeps exactly one entry, so `len()` is always the
/// number of distinct bookmarked employees. Serialized as an ascending JSON
/// array of integers; duplicates in stored input collapse on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<EmployeeId>", into = "Vec<EmployeeId>")]
pub struct BookmarkSet {
    ids: HashSet<EmployeeId>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id`. Returns false when it was already bookmarked.
    pub fn add(&mut self, id: EmployeeId) -> bool {
        self.ids.insert(id)
    }

    /// Removes `id`. Returns false when it was not bookmarked.
    pub fn remove(&mut self, id: EmployeeId) -> bool {
        self.ids.remove(&id)
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in ascending order.
    pub fn to_sorted_vec(&self) -> Vec<EmployeeId> {
        let mut ids: Vec<_> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl FromIterator<EmployeeId> for BookmarkSet {
    fn from_iter<I: IntoIterator<Item = EmployeeId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<EmployeeId>> for BookmarkSet {
    fn from(ids: Vec<EmployeeId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<BookmarkSet> for Vec<EmployeeId> {
    fn from(set: BookmarkSet) -> Self {
        set.to_sorted_vec()
    }
}
