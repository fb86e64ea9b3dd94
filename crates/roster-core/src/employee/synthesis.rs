//! Turning remote records and form candidates into roster entries.

use super::model::{Company, Employee, EmployeeId, RemoteUserRecord};
use super::request::NewEmployee;
use crate::error::{Result, RosterError};
use crate::random::RandomSource;

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";
const DEFAULT_TITLE: &str = "Employee";

/// Maps a remote record into an employee, copying identity and contact
/// fields verbatim and drawing department and rating from `random`.
pub fn from_remote(record: RemoteUserRecord, random: &mut dyn RandomSource) -> Employee {
    let department = random.department();
    let rating = random.rating();
    Employee {
        id: record.id,
        first_name: record.first_name,
        last_name: record.last_name,
        email: record.email,
        age: record.age,
        department,
        rating,
        phone: record.phone,
        address: record.address,
        image: record.image,
        company: record.company,
    }
}

/// Next free identifier: one past the current maximum, or 1 for an empty roster.
///
/// Fails once the maximum is `EmployeeId::MAX`.
pub fn next_id(roster: &[Employee]) -> Result<EmployeeId> {
    roster
        .iter()
        .map(|e| e.id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| RosterError::internal("roster id space exhausted"))
}

/// Avatar URI derived from the concatenated first and last name.
pub fn avatar_uri(first_name: &str, last_name: &str) -> String {
    format!("{}?seed={}{}", AVATAR_BASE_URL, first_name, last_name)
}

/// Builds a locally created employee with the given id and a random rating.
pub fn from_candidate(
    candidate: NewEmployee,
    id: EmployeeId,
    random: &mut dyn RandomSource,
) -> Employee {
    let image = avatar_uri(&candidate.first_name, &candidate.last_name);
    Employee {
        id,
        first_name: candidate.first_name,
        last_name: candidate.last_name,
        email: candidate.email,
        age: candidate.age,
        department: candidate.department,
        rating: random.rating(),
        phone: candidate.phone,
        address: candidate.address,
        image,
        company: Some(Company {
            department: candidate.department.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }),
    }
}
