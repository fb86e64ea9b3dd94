//! End-to-end dashboard flows over in-memory and on-disk storage.

use std::sync::Arc;

use async_trait::async_trait;
use roster_application::{Dashboard, FETCH_FAILED_MESSAGE, RosterService, StateContainer};
use roster_core::employee::{
    Address, Department, EmployeeSource, NewEmployeeRequest, Rating, RemoteUserRecord,
};
use roster_core::error::{Result, RosterError};
use roster_core::filter::{DepartmentFilter, RatingFilter};
use roster_core::random::ScriptedRandom;
use roster_core::state::{LoadStatus, Theme};
use roster_infrastructure::{InMemoryKeyValueStore, KeyValueStateRepository, RosterPaths};
use tempfile::TempDir;

const NAMESPACE: &str = "hr-dashboard-storage";

struct StubSource {
    records: Vec<RemoteUserRecord>,
}

#[async_trait]
impl EmployeeSource for StubSource {
    async fn fetch_users(&self) -> Result<Vec<RemoteUserRecord>> {
        Ok(self.records.clone())
    }
}

struct DownSource;

#[async_trait]
impl EmployeeSource for DownSource {
    async fn fetch_users(&self) -> Result<Vec<RemoteUserRecord>> {
        Err(RosterError::fetch("Request failed: connection refused"))
    }
}

fn record(id: u32, first: &str, last: &str) -> RemoteUserRecord {
    RemoteUserRecord {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        age: 30 + id,
        phone: format!("555-010{}", id),
        address: Address {
            address: format!("{} Main Street", id),
            city: "Phoenix".to_string(),
            state: "Arizona".to_string(),
        },
        image: format!("https://example.com/{}.png", id),
        company: None,
    }
}

/// Five records with scripted (department, rating) pairs:
/// Engineering/5, Sales/3, Engineering/4, Design/5, Sales/2.
fn source() -> StubSource {
    StubSource {
        records: vec![
            record(1, "Emily", "Johnson"),
            record(2, "Michael", "Williams"),
            record(3, "Sophia", "Brown"),
            record(7, "James", "Davis"),
            record(5, "Emma", "Miller"),
        ],
    }
}

fn scripted() -> RosterService {
    // index into Department::ALL, then index into Rating::ALL, per record;
    // the trailing 0 is the rating for a locally added employee
    RosterService::new(Box::new(ScriptedRandom::new(vec![
        0, 4, 2, 2, 0, 3, 6, 4, 2, 1, 0,
    ])))
}

fn in_memory_dashboard(store: Arc<InMemoryKeyValueStore>) -> Dashboard {
    let repository = Arc::new(KeyValueStateRepository::new(store, NAMESPACE));
    Dashboard::new(Arc::new(StateContainer::new(repository)), scripted())
}

fn add_request() -> NewEmployeeRequest {
    NewEmployeeRequest {
        first_name: "A".to_string(),
        last_name: "B".to_string(),
        email: "a.b@example.com".to_string(),
        age: Some(25),
        department: "Finance".to_string(),
        phone: "555-0199".to_string(),
        address: "9 Side Road".to_string(),
        city: "Austin".to_string(),
        state: "Texas".to_string(),
        bio: Some("Joined from the add form".to_string()),
    }
}

#[tokio::test]
async fn test_bootstrap_then_filter_and_analytics() {
    let dashboard = in_memory_dashboard(Arc::new(InMemoryKeyValueStore::new()));

    let count = dashboard.bootstrap(&source()).await.unwrap();
    assert_eq!(count, 5);
    assert_eq!(dashboard.state().load_status, LoadStatus::Ready);

    let summary = dashboard.summary();
    assert_eq!(summary.statistics.count, 5);
    assert_eq!(summary.statistics.average_rating, 3.8);
    assert_eq!(summary.statistics.high_performer_count, 3);

    dashboard.set_department_filter(DepartmentFilter::Only(Department::Engineering));
    let ids: Vec<_> = dashboard.visible_roster().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3]);

    dashboard.set_rating_filter(RatingFilter::Exactly(Rating::new(4).unwrap()));
    let ids: Vec<_> = dashboard.visible_roster().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3]);

    dashboard.clear_filters();
    dashboard.set_search_term("MILLER");
    let ids: Vec<_> = dashboard.visible_roster().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![5]);

    let top: Vec<_> = dashboard.top_performers(5).iter().map(|e| e.id).collect();
    assert_eq!(top, vec![1, 7, 3]);

    let departments: Vec<_> = dashboard
        .department_breakdown()
        .iter()
        .map(|d| (d.department, d.count, d.average_rating))
        .collect();
    assert_eq!(
        departments,
        vec![
            (Department::Engineering, 2, 4.5),
            (Department::Sales, 2, 2.5),
            (Department::Design, 1, 5.0),
        ]
    );
}

#[tokio::test]
async fn test_add_employee_after_max_id_seven() {
    let dashboard = in_memory_dashboard(Arc::new(InMemoryKeyValueStore::new()));
    dashboard.bootstrap(&source()).await.unwrap();

    let employee = dashboard.add_employee(&add_request()).unwrap();

    assert_eq!(employee.id, 8);
    assert_eq!(employee.rating, Rating::new(1).unwrap());
    assert_eq!(employee.department, Department::Finance);
    assert_eq!(
        employee.image,
        "https://api.dicebear.com/7.x/avataaars/svg?seed=AB"
    );
    assert_eq!(dashboard.state().employees.last(), Some(&employee));

    // Duplicate emails are accepted
    let again = dashboard.add_employee(&add_request()).unwrap();
    assert_eq!(again.id, 9);
    assert_eq!(again.email, employee.email);
}

#[tokio::test]
async fn test_bookmarks_are_idempotent() {
    let dashboard = in_memory_dashboard(Arc::new(InMemoryKeyValueStore::new()));
    dashboard.bootstrap(&source()).await.unwrap();

    dashboard.add_bookmark(3);
    dashboard.add_bookmark(3);
    assert_eq!(dashboard.summary().bookmarked_count, 1);

    dashboard.add_bookmark(1);
    let ids: Vec<_> = dashboard.bookmarked_employees().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3]);

    dashboard.remove_bookmark(3);
    dashboard.remove_bookmark(1);
    assert!(dashboard.state().bookmarks.is_empty());
}

#[tokio::test]
async fn test_persisted_slice_survives_restart() {
    let store = Arc::new(InMemoryKeyValueStore::new());

    let first = in_memory_dashboard(store.clone());
    first.bootstrap(&source()).await.unwrap();
    first.add_bookmark(2);
    first.add_bookmark(7);
    first.set_theme(Theme::Dark);
    first.set_search_term("so");
    first.set_rating_filter(RatingFilter::Exactly(Rating::new(4).unwrap()));
    first.add_employee(&add_request()).unwrap();

    let second = in_memory_dashboard(store);
    let state = second.state();
    assert_eq!(state.bookmarks.to_sorted_vec(), vec![2, 7]);
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.filter.search_term, "so");
    assert_eq!(
        state.filter.rating_filter,
        RatingFilter::Exactly(Rating::new(4).unwrap())
    );
    // The roster is re-fetched each session, never stored
    assert!(state.employees.is_empty());
    assert_eq!(state.load_status, LoadStatus::Idle);
}

#[tokio::test]
async fn test_persisted_slice_survives_restart_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let paths = RosterPaths::new().with_storage_dir(temp_dir.path());
    let open = || {
        let repository = Arc::new(KeyValueStateRepository::file_backed(&paths, NAMESPACE).unwrap());
        Dashboard::new(Arc::new(StateContainer::new(repository)), scripted())
    };

    let first = open();
    first.toggle_bookmark(4);
    first.set_department_filter(DepartmentFilter::Only(Department::Hr));

    let state = open().state();
    assert!(state.bookmarks.contains(4));
    assert_eq!(
        state.filter.department_filter,
        DepartmentFilter::Only(Department::Hr)
    );
}

#[tokio::test]
async fn test_corrupt_storage_starts_from_defaults() {
    let store = Arc::new(InMemoryKeyValueStore::new().with_entry(NAMESPACE, "{\"bookmarks\": [1,"));
    let dashboard = in_memory_dashboard(store);

    let state = dashboard.state();
    assert!(state.bookmarks.is_empty());
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.filter.has_active_filters());
}

#[tokio::test]
async fn test_failed_fetch_is_terminal() {
    let dashboard = in_memory_dashboard(Arc::new(InMemoryKeyValueStore::new()));

    let err = dashboard.bootstrap(&DownSource).await.unwrap_err();

    assert!(err.is_fetch());
    let state = dashboard.state();
    assert_eq!(
        state.load_status,
        LoadStatus::Failed(FETCH_FAILED_MESSAGE.to_string())
    );
    assert!(state.employees.is_empty());
    assert_eq!(dashboard.summary().statistics.average_rating, 0.0);
}

#[tokio::test]
async fn test_remote_ids_at_the_edges() {
    let dashboard = in_memory_dashboard(Arc::new(InMemoryKeyValueStore::new()));
    let mut top = record(9, "Max", "Id");
    top.id = u32::MAX;
    let edges = StubSource {
        records: vec![record(0, "Zero", "Id"), top],
    };

    assert_eq!(dashboard.bootstrap(&edges).await.unwrap(), 1);
    assert_eq!(dashboard.state().employees[0].id, u32::MAX);

    let err = dashboard.add_employee(&add_request()).unwrap_err();
    assert!(matches!(err, RosterError::Internal(_)));
    assert_eq!(dashboard.state().employees.len(), 1);
}
