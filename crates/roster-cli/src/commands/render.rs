//! Terminal rendering shared by the commands.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use roster_core::employee::{Employee, Rating};
use roster_core::filter::FilterState;
use roster_core::validation::ValidationErrors;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn stars(rating: Rating) -> String {
    let filled = usize::from(rating.value());
    let empty = usize::from(Rating::MAX) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

fn colored_stars(rating: Rating) -> String {
    let text = stars(rating);
    if rating.is_high_performer() {
        text.green().to_string()
    } else if rating.value() <= 2 {
        text.red().to_string()
    } else {
        text.yellow().to_string()
    }
}

/// One-line roster entry, prefixed with a bookmark marker.
pub fn employee_row(employee: &Employee, bookmarked: bool) -> String {
    let marker = if bookmarked {
        "●".cyan().to_string()
    } else {
        " ".to_string()
    };
    format!(
        "{} {:>4}  {:<24} {:<12} {}  {}",
        marker,
        employee.id,
        employee.full_name().bold(),
        employee.department.to_string(),
        colored_stars(employee.rating),
        employee.email.dimmed()
    )
}

pub fn print_roster<'a>(
    employees: impl IntoIterator<Item = &'a Employee>,
    is_bookmarked: impl Fn(&Employee) -> bool,
) -> usize {
    let mut count = 0;
    for employee in employees {
        println!("{}", employee_row(employee, is_bookmarked(employee)));
        count += 1;
    }
    count
}

pub fn print_profile(employee: &Employee, bookmarked: bool) {
    let title = employee
        .company
        .as_ref()
        .map(|c| c.title.as_str())
        .unwrap_or("-");
    println!("{}", employee.full_name().bold().underline());
    println!("  {:<11}{}", "ID", employee.id);
    println!("  {:<11}{}", "Department", employee.department);
    println!("  {:<11}{}", "Title", title);
    println!(
        "  {:<11}{} ({})",
        "Rating",
        colored_stars(employee.rating),
        employee.rating
    );
    println!("  {:<11}{}", "Age", employee.age);
    println!("  {:<11}{}", "Email", employee.email);
    println!("  {:<11}{}", "Phone", employee.phone);
    println!(
        "  {:<11}{}, {}, {}",
        "Address", employee.address.address, employee.address.city, employee.address.state
    );
    println!("  {:<11}{}", "Avatar", employee.image.dimmed());
    if bookmarked {
        println!("  {}", "Bookmarked".cyan());
    }
}

pub fn print_filters(filter: &FilterState) {
    let search = if filter.search_term.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        format!("\"{}\"", filter.search_term)
    };
    println!("{:<12}{}", "Search", search);
    println!("{:<12}{}", "Department", filter.department_filter);
    println!("{:<12}{}", "Rating", filter.rating_filter);
    if filter.has_active_filters() {
        println!("{}", "Filters active; `roster filters clear` resets them".dimmed());
    }
}

pub fn print_validation_errors(errors: &ValidationErrors) {
    eprintln!("{}", "Please fix the following:".red().bold());
    for error in errors.iter() {
        eprintln!("  {} {}", format!("{}:", error.field).red(), error.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(Rating::new(3).unwrap()), "★★★☆☆");
        assert_eq!(stars(Rating::new(5).unwrap()), "★★★★★");
    }
}
