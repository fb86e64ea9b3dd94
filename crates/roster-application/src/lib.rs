//! Application layer for Roster.
//!
//! Use cases that coordinate the domain with injected repositories and
//! sources: the state container, roster synthesis, the dashboard facade
//! and the mock feedback service.

pub mod dashboard;
pub mod feedback_service;
pub mod roster_service;
pub mod store;

pub use dashboard::{Dashboard, DashboardSummary, FETCH_FAILED_MESSAGE};
pub use feedback_service::InMemoryFeedbackService;
pub use roster_service::RosterService;
pub use store::{Mutation, StateContainer, SubscriptionId};
