//! Employee domain module.
//!
//! # Module Structure
//!
//! - `model`: Employee, Department, Rating and the raw remote record
//! - `request`: add-employee form input and validation
//! - `synthesis`: record/candidate to employee mapping
//! - `source`: remote source trait

mod model;
mod request;
mod source;
pub mod synthesis;

pub use model::{
    Address, Company, Department, Employee, EmployeeId, InvalidRating, Rating, RemoteUserRecord,
};
pub use request::{MAX_AGE, MIN_AGE, NewEmployee, NewEmployeeRequest};
pub use source::EmployeeSource;
