//! Dashboard state: persisted preferences and the aggregate snapshot.

pub mod model;
pub mod repository;

pub use model::{AppState, DashboardState, LoadStatus, Theme};
pub use repository::StateRepository;
