//! Employee feedback domain.
//!
//! Feedback is a mock flow: submissions are recorded in-process and never
//! leave the machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use uuid::Uuid;

use crate::employee::EmployeeId;
use crate::error::Result;
use crate::validation::ValidationErrors;

pub const MIN_MESSAGE_LEN: usize = 10;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeedbackKind {
    Positive,
    Constructive,
    #[default]
    General,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub employee_id: EmployeeId,
    #[serde(default)]
    pub kind: FeedbackKind,
    pub message: String,
}

impl FeedbackRequest {
    pub fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if errors.require("message", &self.message, "Feedback message is required")
            && self.message.trim().chars().count() < MIN_MESSAGE_LEN
        {
            errors.add(
                "message",
                format!("Feedback must be at least {} characters", MIN_MESSAGE_LEN),
            );
        }
        errors.into_result(())
    }
}

/// Acknowledgement of a recorded submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReceipt {
    pub id: Uuid,
    pub employee_id: EmployeeId,
    pub kind: FeedbackKind,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl FeedbackReceipt {
    pub fn new(request: FeedbackRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id: request.employee_id,
            kind: request.kind,
            message: request.message.trim().to_string(),
            submitted_at: Utc::now(),
        }
    }
}

/// Accepts feedback about an employee.
#[async_trait::async_trait]
pub trait FeedbackService: Send + Sync {
    /// Validates and records a submission.
    ///
    /// # Returns
    ///
    /// - `Ok(FeedbackReceipt)`: Recorded
    /// - `Err(RosterError::Validation)`: Message missing or too short
    /// - `Err(RosterError::NotFound)`: Unknown employee
    async fn submit(&self, request: FeedbackRequest) -> Result<FeedbackReceipt>;

    /// Submissions recorded for one employee, oldest first.
    async fn list_for(&self, employee_id: EmployeeId) -> Result<Vec<FeedbackReceipt>>;
}
