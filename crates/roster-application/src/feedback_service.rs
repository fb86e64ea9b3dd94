//! In-process mock of the feedback endpoint.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use roster_core::employee::EmployeeId;
use roster_core::error::{Result, RosterError};
use roster_core::feedback::{FeedbackReceipt, FeedbackRequest, FeedbackService};

use crate::store::StateContainer;

/// Records submissions in memory after an optional simulated latency.
///
/// Employee ids are checked against the container's current roster.
pub struct InMemoryFeedbackService {
    container: Arc<StateContainer>,
    submissions: Mutex<Vec<FeedbackReceipt>>,
    latency: Option<Duration>,
}

impl InMemoryFeedbackService {
    pub fn new(container: Arc<StateContainer>) -> Self {
        Self {
            container,
            submissions: Mutex::new(Vec::new()),
            latency: None,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

#[async_trait]
impl FeedbackService for InMemoryFeedbackService {
    async fn submit(&self, request: FeedbackRequest) -> Result<FeedbackReceipt> {
        request.validate()?;

        let known = self
            .container
            .get_state()
            .employees
            .iter()
            .any(|e| e.id == request.employee_id);
        if !known {
            return Err(RosterError::not_found("employee", request.employee_id));
        }

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let receipt = FeedbackReceipt::new(request);
        tracing::info!(
            "[FeedbackService] Recorded {} feedback {} for employee {}",
            receipt.kind,
            receipt.id,
            receipt.employee_id
        );
        self.submissions.lock().await.push(receipt.clone());
        Ok(receipt)
    }

    async fn list_for(&self, employee_id: EmployeeId) -> Result<Vec<FeedbackReceipt>> {
        Ok(self
            .submissions
            .lock()
            .await
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect())
    }
}
