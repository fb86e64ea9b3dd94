use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use roster_core::analytics::DEFAULT_TOP_PERFORMERS;

use super::AppContext;
use super::render;

pub async fn summary(ctx: &AppContext, json: bool) -> Result<()> {
    ctx.load_roster().await?;
    let summary = ctx.dashboard().summary();
    if json {
        return render::print_json(&summary);
    }

    println!("{}", "Dashboard".bold().underline());
    println!("  {:<20}{}", "Total employees", summary.statistics.count);
    println!(
        "  {:<20}{:.1}",
        "Average rating", summary.statistics.average_rating
    );
    println!(
        "  {:<20}{}",
        "High performers", summary.statistics.high_performer_count
    );
    println!("  {:<20}{}", "Bookmarked", summary.bookmarked_count);
    Ok(())
}

pub async fn analytics(ctx: &AppContext, json: bool) -> Result<()> {
    ctx.load_roster().await?;
    let dashboard = ctx.dashboard();
    let departments = dashboard.department_breakdown();
    let distribution = dashboard.rating_distribution();
    let top = dashboard.top_performers(DEFAULT_TOP_PERFORMERS);

    if json {
        return render::print_json(&json!({
            "departments": departments,
            "ratingDistribution": distribution,
            "topPerformers": top,
        }));
    }

    println!("{}", "Departments".bold().underline());
    for summary in &departments {
        println!(
            "  {:<12}{:>4} employees   avg {:.1}",
            summary.department.to_string(),
            summary.count,
            summary.average_rating
        );
    }

    println!();
    println!("{}", "Rating distribution".bold().underline());
    for bucket in &distribution {
        println!(
            "  {}  {:>3}  {}",
            render::stars(bucket.rating),
            bucket.count,
            "▇".repeat(bucket.count).cyan()
        );
    }

    println!();
    println!("{}", "Top performers".bold().underline());
    if top.is_empty() {
        println!("  {}", "No employees rated 4 or higher".dimmed());
    }
    let state = dashboard.state();
    render::print_roster(&top, |e| state.bookmarks.contains(e.id));
    Ok(())
}
