//! Add-employee form input and its validation rules.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::model::{Address, Department};
use crate::validation::{ValidationErrors, is_valid_email};

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 70;

/// Raw add-employee form data, exactly as entered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: Option<u32>,
    /// Department name; must be one of [`Department::ALL`]
    pub department: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub bio: Option<String>,
}

/// A request that passed validation, ready for id and rating assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
    pub department: Department,
    pub phone: String,
    pub address: Address,
    pub bio: Option<String>,
}

impl NewEmployeeRequest {
    /// Checks every field and collects one message per failing field.
    ///
    /// Email uniqueness is not checked; duplicates are accepted.
    pub fn validate(&self) -> Result<NewEmployee, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.require("firstName", &self.first_name, "First name is required");
        errors.require("lastName", &self.last_name, "Last name is required");

        if errors.require("email", &self.email, "Email is required")
            && !is_valid_email(self.email.trim())
        {
            errors.add("email", "Invalid email address");
        }

        let age = match self.age {
            None => {
                errors.add("age", "Age is required");
                0
            }
            Some(age) if age < MIN_AGE => {
                errors.add("age", format!("Age must be at least {}", MIN_AGE));
                age
            }
            Some(age) if age > MAX_AGE => {
                errors.add("age", format!("Age must be less than {}", MAX_AGE));
                age
            }
            Some(age) => age,
        };

        let department = if errors.require("department", &self.department, "Department is required") {
            match Department::from_str(self.department.trim()) {
                Ok(department) => Some(department),
                Err(_) => {
                    errors.add("department", "Unknown department");
                    None
                }
            }
        } else {
            None
        };

        errors.require("phone", &self.phone, "Phone number is required");
        errors.require("address", &self.address, "Address is required");
        errors.require("city", &self.city, "City is required");
        errors.require("state", &self.state, "State is required");

        match department {
            Some(department) if errors.is_empty() => Ok(NewEmployee {
                first_name: self.first_name.trim().to_string(),
                last_name: self.last_name.trim().to_string(),
                email: self.email.trim().to_string(),
                age,
                department,
                phone: self.phone.trim().to_string(),
                address: Address {
                    address: self.address.trim().to_string(),
                    city: self.city.trim().to_string(),
                    state: self.state.trim().to_string(),
                },
                bio: self
                    .bio
                    .as_ref()
                    .map(|b| b.trim().to_string())
                    .filter(|b| !b.is_empty()),
            }),
            _ => Err(errors),
        }
    }
}
