//! Search/filter state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::employee::{Department, Rating};

/// Filter value meaning "no constraint on this field".
pub const ALL_SENTINEL: &str = "All";

/// A stored or typed filter value that names no known option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} filter '{value}'")]
pub struct InvalidFilterValue {
    pub kind: &'static str,
    pub value: String,
}

/// Department filter: everything, or one department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DepartmentFilter {
    #[default]
    All,
    Only(Department),
}

impl DepartmentFilter {
    pub fn matches(&self, department: Department) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == department,
        }
    }
}

impl FromStr for DepartmentFilter {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_SENTINEL {
            return Ok(Self::All);
        }
        Department::from_str(s)
            .map(Self::Only)
            .map_err(|_| InvalidFilterValue {
                kind: "department",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for DepartmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_SENTINEL),
            Self::Only(department) => write!(f, "{}", department),
        }
    }
}

impl TryFrom<String> for DepartmentFilter {
    type Error = InvalidFilterValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DepartmentFilter> for String {
    fn from(filter: DepartmentFilter) -> Self {
        filter.to_string()
    }
}

/// Rating filter: everything, or one exact rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RatingFilter {
    #[default]
    All,
    Exactly(Rating),
}

impl RatingFilter {
    pub fn matches(&self, rating: Rating) -> bool {
        match self {
            Self::All => true,
            Self::Exactly(wanted) => *wanted == rating,
        }
    }
}

impl FromStr for RatingFilter {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_SENTINEL {
            return Ok(Self::All);
        }
        Rating::from_str(s)
            .map(Self::Exactly)
            .map_err(|_| InvalidFilterValue {
                kind: "rating",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for RatingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_SENTINEL),
            Self::Exactly(rating) => write!(f, "{}", rating),
        }
    }
}

impl TryFrom<String> for RatingFilter {
    type Error = InvalidFilterValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RatingFilter> for String {
    fn from(filter: RatingFilter) -> Self {
        filter.to_string()
    }
}

/// The three independent filter fields.
///
/// Each field defaults to its neutral value; none constrains another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Free-text query, matched case-insensitively
    pub search_term: String,
    pub department_filter: DepartmentFilter,
    pub rating_filter: RatingFilter,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the department or rating filter is narrowing the roster.
    /// The search term does not count.
    pub fn has_active_filters(&self) -> bool {
        self.department_filter != DepartmentFilter::All || self.rating_filter != RatingFilter::All
    }

    /// Resets department and rating to "All", keeping the search term.
    pub fn clear_filters(&mut self) {
        self.department_filter = DepartmentFilter::All;
        self.rating_filter = RatingFilter::All;
    }
}
