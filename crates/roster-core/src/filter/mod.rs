//! Search and filter state plus the pure filter engine.

mod engine;
mod model;

pub use engine::{matches, visible_roster};
pub use model::{ALL_SENTINEL, DepartmentFilter, FilterState, InvalidFilterValue, RatingFilter};
