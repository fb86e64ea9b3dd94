use anyhow::{Context, Result};
use colored::Colorize;

use roster_core::filter::{DepartmentFilter, RatingFilter};

use super::AppContext;
use super::render;

/// Applies any given filter flags, then prints the visible roster.
pub async fn run(
    ctx: &AppContext,
    search: Option<String>,
    department: Option<String>,
    rating: Option<String>,
    json: bool,
) -> Result<()> {
    let dashboard = ctx.dashboard();

    // Parse everything before dispatching so a bad flag changes nothing
    let department = department
        .map(|raw| raw.parse::<DepartmentFilter>())
        .transpose()
        .context("Invalid --department")?;
    let rating = rating
        .map(|raw| raw.parse::<RatingFilter>())
        .transpose()
        .context("Invalid --rating")?;

    if let Some(term) = search {
        dashboard.set_search_term(term);
    }
    if let Some(filter) = department {
        dashboard.set_department_filter(filter);
    }
    if let Some(filter) = rating {
        dashboard.set_rating_filter(filter);
    }

    ctx.load_roster().await?;

    let visible = dashboard.visible_roster();
    if json {
        return render::print_json(&visible);
    }

    let state = dashboard.state();
    let shown = render::print_roster(&visible, |e| state.bookmarks.contains(e.id));
    println!(
        "{}",
        format!("{} of {} employees", shown, state.employees.len()).dimmed()
    );
    if shown == 0 && (state.filter.has_active_filters() || !state.filter.search_term.is_empty()) {
        println!("{}", "No employees match the current filters.".yellow());
    }
    Ok(())
}
