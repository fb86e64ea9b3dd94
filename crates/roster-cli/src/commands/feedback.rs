use anyhow::Result;
use colored::Colorize;

use roster_application::InMemoryFeedbackService;
use roster_core::RosterError;
use roster_core::employee::EmployeeId;
use roster_core::feedback::{FeedbackKind, FeedbackRequest, FeedbackService};

use super::AppContext;
use super::render;

pub async fn run(
    ctx: &AppContext,
    employee_id: EmployeeId,
    kind: FeedbackKind,
    message: String,
) -> Result<()> {
    ctx.load_roster().await?;
    let employee = ctx.dashboard().employee_detail(employee_id)?;

    let service = InMemoryFeedbackService::new(ctx.container().clone());
    let request = FeedbackRequest {
        employee_id,
        kind,
        message,
    };

    match service.submit(request).await {
        Ok(receipt) => {
            println!(
                "{} {} feedback for {} ({})",
                "Submitted".green().bold(),
                receipt.kind,
                employee.full_name(),
                receipt.id.to_string().dimmed()
            );
            Ok(())
        }
        Err(RosterError::Validation(errors)) => {
            render::print_validation_errors(&errors);
            anyhow::bail!("Feedback was not submitted")
        }
        Err(e) => Err(e.into()),
    }
}
