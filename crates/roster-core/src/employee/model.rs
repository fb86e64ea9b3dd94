//! Employee domain models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString};
use thiserror::Error;

/// Roster identifier. Unique within a roster, always positive.
pub type EmployeeId = u32;

/// The fixed set of departments an employee can belong to.
///
/// String forms (`Display`/`FromStr`/serde) are the exact names shown to the
/// user, e.g. `"Engineering"` and `"HR"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    #[serde(rename = "HR")]
    #[strum(serialize = "HR")]
    Hr,
    Finance,
    Operations,
    Design,
}

impl Department {
    /// Every department, in display order.
    pub const ALL: [Department; 7] = [
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::Hr,
        Department::Finance,
        Department::Operations,
        Department::Design,
    ];
}

/// Returned when a rating falls outside 1..=5 or is not a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid rating '{0}', expected an integer between 1 and 5")]
pub struct InvalidRating(pub String);

/// Performance rating, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    /// Ratings at or above this value count as high performers.
    pub const HIGH_PERFORMER_THRESHOLD: u8 = 4;

    /// Every rating, ascending.
    pub const ALL: [Rating; 5] = [Rating(1), Rating(2), Rating(3), Rating(4), Rating(5)];

    pub fn new(value: u8) -> Result<Self, InvalidRating> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidRating(value.to_string()))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_high_performer(self) -> bool {
        self.0 >= Self::HIGH_PERFORMER_THRESHOLD
    }
}

impl TryFrom<u8> for Rating {
    type Error = InvalidRating;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Rating {
    type Err = InvalidRating;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| InvalidRating(s.to_string()))
            .and_then(Self::new)
    }
}

/// Postal address as delivered by the remote source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub address: String,
    pub city: String,
    pub state: String,
}

/// Optional employer details. `department` here is free text from the
/// remote source and is unrelated to [`Department`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub department: String,
    pub title: String,
}

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
    pub department: Department,
    pub rating: Rating,
    pub phone: String,
    pub address: Address,
    /// Avatar image URI
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_high_performer(&self) -> bool {
        self.rating.is_high_performer()
    }
}

/// A user record as returned by the remote listing endpoint.
///
/// It carries no department or rating; those are synthesized on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteUserRecord {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
    pub phone: String,
    pub address: Address,
    pub image: String,
    #[serde(default)]
    pub company: Option<Company>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_string_forms() {
        assert_eq!(Department::Hr.to_string(), "HR");
        assert_eq!(Department::from_str("HR").unwrap(), Department::Hr);
        assert_eq!(
            Department::from_str("Engineering").unwrap(),
            Department::Engineering
        );
        assert!(Department::from_str("Legal").is_err());
        assert_eq!(serde_json::to_string(&Department::Hr).unwrap(), "\"HR\"");
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert_eq!(Rating::new(3).unwrap().value(), 3);
        assert!(Rating::new(4).unwrap().is_high_performer());
        assert!(!Rating::new(3).unwrap().is_high_performer());
    }

    #[test]
    fn test_rating_parse() {
        assert_eq!("5".parse::<Rating>().unwrap().value(), 5);
        assert!("abc".parse::<Rating>().is_err());
        assert!("9".parse::<Rating>().is_err());
    }

    #[test]
    fn test_rating_rejects_out_of_range_json() {
        assert!(serde_json::from_str::<Rating>("7").is_err());
        assert_eq!(serde_json::from_str::<Rating>("2").unwrap().value(), 2);
    }

    #[test]
    fn test_remote_record_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "firstName": "Emily",
            "lastName": "Johnson",
            "maidenName": "Smith",
            "email": "emily.johnson@x.dummyjson.com",
            "age": 28,
            "phone": "+81 965-431-3024",
            "address": {
                "address": "626 Main Street",
                "city": "Phoenix",
                "state": "Mississippi",
                "postalCode": "29112"
            },
            "image": "https://dummyjson.com/icon/emilys/128",
            "company": {
                "department": "Engineering",
                "name": "Dooley, Kozey and Cronin",
                "title": "Sales Manager"
            }
        }"#;
        let record: RemoteUserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.address.city, "Phoenix");
        assert_eq!(record.company.unwrap().title, "Sales Manager");
    }

    #[test]
    fn test_remote_record_without_company() {
        let json = r#"{
            "id": 2, "firstName": "A", "lastName": "B", "email": "a@b", "age": 30,
            "phone": "1", "address": {"address": "x", "city": "y", "state": "z"},
            "image": "img"
        }"#;
        let record: RemoteUserRecord = serde_json::from_str(json).unwrap();
        assert!(record.company.is_none());
    }
}
