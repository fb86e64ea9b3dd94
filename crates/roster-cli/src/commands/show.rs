use anyhow::Result;

use roster_core::employee::EmployeeId;

use super::AppContext;
use super::render;

pub async fn run(ctx: &AppContext, id: EmployeeId, json: bool) -> Result<()> {
    ctx.load_roster().await?;
    let dashboard = ctx.dashboard();
    let employee = dashboard.employee_detail(id)?;
    if json {
        return render::print_json(&employee);
    }
    render::print_profile(&employee, dashboard.is_bookmarked(id));
    Ok(())
}
