use anyhow::Result;
use colored::Colorize;

use roster_core::employee::EmployeeId;

use super::AppContext;
use super::render;

pub async fn list(ctx: &AppContext) -> Result<()> {
    ctx.load_roster().await?;
    let bookmarked = ctx.dashboard().bookmarked_employees();
    if bookmarked.is_empty() {
        println!("{}", "No bookmarks yet".dimmed());
        return Ok(());
    }
    render::print_roster(&bookmarked, |_| true);
    Ok(())
}

pub fn add(ctx: &AppContext, id: EmployeeId) {
    ctx.dashboard().add_bookmark(id);
    println!("Bookmarked {}", id);
}

pub fn remove(ctx: &AppContext, id: EmployeeId) {
    ctx.dashboard().remove_bookmark(id);
    println!("Removed bookmark {}", id);
}

pub fn toggle(ctx: &AppContext, id: EmployeeId) {
    if ctx.dashboard().toggle_bookmark(id) {
        println!("Bookmarked {}", id);
    } else {
        println!("Removed bookmark {}", id);
    }
}
