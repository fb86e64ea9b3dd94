//! State transitions accepted by the container.

use roster_core::employee::{Employee, EmployeeId};
use roster_core::filter::{DepartmentFilter, RatingFilter};
use roster_core::state::{DashboardState, LoadStatus, Theme};

/// The fixed set of state transitions the container accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    SetSearchTerm(String),
    SetDepartmentFilter(DepartmentFilter),
    SetRatingFilter(RatingFilter),
    /// Resets department and rating, keeps the search term
    ClearFilters,
    AddBookmark(EmployeeId),
    RemoveBookmark(EmployeeId),
    /// Replaces the whole roster
    SetEmployees(Vec<Employee>),
    AddEmployee(Employee),
    SetTheme(Theme),
    SetLoadStatus(LoadStatus),
}

impl Mutation {
    /// Short name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetSearchTerm(_) => "setSearchTerm",
            Self::SetDepartmentFilter(_) => "setDepartmentFilter",
            Self::SetRatingFilter(_) => "setRatingFilter",
            Self::ClearFilters => "clearFilters",
            Self::AddBookmark(_) => "addBookmark",
            Self::RemoveBookmark(_) => "removeBookmark",
            Self::SetEmployees(_) => "setEmployees",
            Self::AddEmployee(_) => "addEmployee",
            Self::SetTheme(_) => "setTheme",
            Self::SetLoadStatus(_) => "setLoadStatus",
        }
    }

    /// Applies the mutation in place.
    pub(crate) fn apply(self, state: &mut DashboardState) {
        match self {
            Self::SetSearchTerm(term) => state.filter.search_term = term,
            Self::SetDepartmentFilter(filter) => state.filter.department_filter = filter,
            Self::SetRatingFilter(filter) => state.filter.rating_filter = filter,
            Self::ClearFilters => state.filter.clear_filters(),
            Self::AddBookmark(id) => {
                state.bookmarks.add(id);
            }
            Self::RemoveBookmark(id) => {
                state.bookmarks.remove(id);
            }
            Self::SetEmployees(employees) => state.employees = employees,
            Self::AddEmployee(employee) => {
                if state.employees.iter().any(|e| e.id == employee.id) {
                    tracing::warn!(
                        "[StateContainer] Employee id {} already in roster, ignoring add",
                        employee.id
                    );
                } else {
                    state.employees.push(employee);
                }
            }
            Self::SetTheme(theme) => state.theme = theme,
            Self::SetLoadStatus(status) => state.load_status = status,
        }
    }
}
