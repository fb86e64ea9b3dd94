//! Domain layer for the roster dashboard.
//!
//! Holds the employee model, the bookmark and filter state, the pure
//! filter and analytics functions, and the traits the outer layers
//! implement (remote source, state repository, feedback). Nothing here
//! performs I/O.

pub mod analytics;
pub mod bookmark;
pub mod config;
pub mod employee;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod random;
pub mod state;
pub mod validation;

// Re-export common error type
pub use error::{Result, RosterError};
