//! Dashboard use cases over the state container.

use std::sync::Arc;

use serde::Serialize;

use roster_core::analytics::{self, DepartmentSummary, RatingBucket, Statistics};
use roster_core::employee::{Employee, EmployeeId, EmployeeSource, NewEmployeeRequest};
use roster_core::error::{Result, RosterError};
use roster_core::filter::{self, DepartmentFilter, RatingFilter};
use roster_core::state::{DashboardState, LoadStatus, Theme};

use crate::roster_service::RosterService;
use crate::store::{Mutation, StateContainer};

/// User-facing message stored in `LoadStatus::Failed`.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch employees";

/// Headline numbers plus the bookmark count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(flatten)]
    pub statistics: Statistics,
    pub bookmarked_count: usize,
}

/// Entry point for everything a view needs: bootstrap, filtered and derived
/// reads, and the user-driven mutations.
///
/// Reads take a fresh snapshot per call and return owned values.
pub struct Dashboard {
    container: Arc<StateContainer>,
    roster: RosterService,
}

impl Dashboard {
    pub fn new(container: Arc<StateContainer>, roster: RosterService) -> Self {
        Self { container, roster }
    }

    pub fn container(&self) -> &Arc<StateContainer> {
        &self.container
    }

    pub fn state(&self) -> Arc<DashboardState> {
        self.container.get_state()
    }

    /// Runs the one-shot roster fetch.
    ///
    /// Sets `Loading`, then either `Ready` with the fetched roster or
    /// `Failed` with an empty roster. There is no retry. Dropping the future
    /// before it completes abandons the fetch and leaves the status at
    /// `Loading`.
    ///
    /// Returns the roster size, or the fetch error after recording the
    /// failure.
    pub async fn bootstrap(&self, source: &dyn EmployeeSource) -> Result<usize> {
        self.container
            .dispatch(Mutation::SetLoadStatus(LoadStatus::Loading));

        match self.roster.fetch(source).await {
            Ok(employees) => {
                let count = employees.len();
                tracing::info!("[Dashboard] Loaded {} employees", count);
                self.container.dispatch(Mutation::SetEmployees(employees));
                self.container
                    .dispatch(Mutation::SetLoadStatus(LoadStatus::Ready));
                Ok(count)
            }
            Err(e) => {
                tracing::error!("[Dashboard] Roster fetch failed: {}", e);
                self.container.dispatch(Mutation::SetEmployees(Vec::new()));
                self.container
                    .dispatch(Mutation::SetLoadStatus(LoadStatus::Failed(
                        FETCH_FAILED_MESSAGE.to_string(),
                    )));
                Err(e)
            }
        }
    }

    // ----- reads -----

    pub fn visible_roster(&self) -> Vec<Employee> {
        let state = self.state();
        filter::visible_roster(&state.employees, &state.filter)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn summary(&self) -> DashboardSummary {
        let state = self.state();
        DashboardSummary {
            statistics: analytics::statistics(&state.employees),
            bookmarked_count: state.bookmarks.len(),
        }
    }

    pub fn department_breakdown(&self) -> Vec<DepartmentSummary> {
        analytics::department_breakdown(&self.state().employees)
    }

    pub fn rating_distribution(&self) -> Vec<RatingBucket> {
        analytics::rating_distribution(&self.state().employees)
    }

    pub fn top_performers(&self, n: usize) -> Vec<Employee> {
        let state = self.state();
        analytics::top_performers(&state.employees, n)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn bookmarked_employees(&self) -> Vec<Employee> {
        let state = self.state();
        analytics::bookmarked_employees(&state.employees, &state.bookmarks)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn employee_detail(&self, id: EmployeeId) -> Result<Employee> {
        analytics::find_employee(&self.state().employees, id).cloned()
    }

    pub fn is_bookmarked(&self, id: EmployeeId) -> bool {
        self.state().bookmarks.contains(id)
    }

    // ----- mutations -----

    pub fn set_search_term(&self, term: impl Into<String>) {
        self.container.dispatch(Mutation::SetSearchTerm(term.into()));
    }

    pub fn set_department_filter(&self, filter: DepartmentFilter) {
        self.container
            .dispatch(Mutation::SetDepartmentFilter(filter));
    }

    pub fn set_rating_filter(&self, filter: RatingFilter) {
        self.container.dispatch(Mutation::SetRatingFilter(filter));
    }

    pub fn clear_filters(&self) {
        self.container.dispatch(Mutation::ClearFilters);
    }

    pub fn add_bookmark(&self, id: EmployeeId) {
        self.container.dispatch(Mutation::AddBookmark(id));
    }

    pub fn remove_bookmark(&self, id: EmployeeId) {
        self.container.dispatch(Mutation::RemoveBookmark(id));
    }

    /// Flips membership of `id`. Returns whether it is bookmarked afterwards.
    pub fn toggle_bookmark(&self, id: EmployeeId) -> bool {
        self.container
            .dispatch_with(|state| {
                if state.bookmarks.contains(id) {
                    Mutation::RemoveBookmark(id)
                } else {
                    Mutation::AddBookmark(id)
                }
            })
            .bookmarks
            .contains(id)
    }

    pub fn set_theme(&self, theme: Theme) {
        self.container.dispatch(Mutation::SetTheme(theme));
    }

    /// Validates the form and appends the new employee to the roster.
    ///
    /// On validation failure nothing is dispatched and the error carries
    /// every failing field. Fails without dispatching when the roster
    /// already holds the largest possible id.
    pub fn add_employee(&self, request: &NewEmployeeRequest) -> Result<Employee> {
        let candidate = request.validate()?;

        let mut created = None;
        self.container.try_dispatch_with(|state| {
            let employee = self.roster.build(&state.employees, candidate)?;
            created = Some(employee.clone());
            Ok(Mutation::AddEmployee(employee))
        })?;

        let Some(employee) = created else {
            return Err(RosterError::internal("add employee produced no record"));
        };
        tracing::info!(
            "[Dashboard] Added employee {} ({})",
            employee.id,
            employee.full_name()
        );
        Ok(employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::employee::Department;
    use roster_core::random::ScriptedRandom;
    use roster_core::state::{AppState, StateRepository};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryRepository {
        saved: Mutex<Option<AppState>>,
    }

    impl StateRepository for MemoryRepository {
        fn load(&self) -> Result<AppState> {
            Ok(self.saved.lock().unwrap().clone().unwrap_or_default())
        }

        fn save(&self, state: &AppState) -> Result<()> {
            *self.saved.lock().unwrap() = Some(state.clone());
            Ok(())
        }
    }

    fn dashboard() -> Dashboard {
        let container = Arc::new(StateContainer::new(Arc::new(MemoryRepository::default())));
        Dashboard::new(container, RosterService::new(Box::new(ScriptedRandom::new(vec![0, 4]))))
    }

    fn request() -> NewEmployeeRequest {
        NewEmployeeRequest {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.com".to_string(),
            age: Some(30),
            department: "Design".to_string(),
            phone: "555".to_string(),
            address: "1 Road".to_string(),
            city: "Town".to_string(),
            state: "State".to_string(),
            bio: None,
        }
    }

    #[test]
    fn test_toggle_bookmark() {
        let dashboard = dashboard();
        assert!(dashboard.toggle_bookmark(2));
        assert!(dashboard.is_bookmarked(2));
        assert!(!dashboard.toggle_bookmark(2));
        assert_eq!(dashboard.summary().bookmarked_count, 0);
    }

    #[test]
    fn test_add_employee_to_empty_roster() {
        let dashboard = dashboard();
        let employee = dashboard.add_employee(&request()).unwrap();

        assert_eq!(employee.id, 1);
        assert_eq!(employee.department, Department::Design);
        assert_eq!(employee.company.as_ref().unwrap().title, "Employee");
        assert_eq!(dashboard.employee_detail(1).unwrap(), employee);
    }

    #[test]
    fn test_invalid_add_dispatches_nothing() {
        let dashboard = dashboard();
        let before = dashboard.state();

        let mut bad = request();
        bad.email = "not-an-email".to_string();
        bad.age = Some(12);
        let err = dashboard.add_employee(&bad).unwrap_err();

        let errors = err.validation_errors().unwrap();
        assert_eq!(errors.get("email"), Some("Invalid email address"));
        assert_eq!(errors.get("age"), Some("Age must be at least 18"));
        assert!(Arc::ptr_eq(&before, &dashboard.state()));
    }

    #[test]
    fn test_summary_serializes_flat() {
        let dashboard = dashboard();
        let json = serde_json::to_value(dashboard.summary()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "count": 0,
                "averageRating": 0.0,
                "highPerformerCount": 0,
                "bookmarkedCount": 0
            })
        );
    }

    #[test]
    fn test_add_employee_when_ids_are_exhausted() {
        let dashboard = dashboard();
        let mut top = dashboard.add_employee(&request()).unwrap();
        top.id = EmployeeId::MAX;
        dashboard
            .container()
            .dispatch(Mutation::SetEmployees(vec![top]));
        let before = dashboard.state();

        let err = dashboard.add_employee(&request()).unwrap_err();

        assert!(matches!(err, RosterError::Internal(_)));
        assert!(Arc::ptr_eq(&before, &dashboard.state()));
    }

    #[test]
    fn test_unknown_employee_detail_is_not_found() {
        let err = dashboard().employee_detail(42).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: employee '42'");
    }
}
