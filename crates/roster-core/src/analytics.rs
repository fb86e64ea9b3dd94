//! Derived views over the roster.
//!
//! All functions are pure and single-pass over the roster slice they get.

use serde::Serialize;
use std::collections::HashMap;

use crate::bookmark::BookmarkSet;
use crate::employee::{Department, Employee, EmployeeId, Rating};
use crate::error::{Result, RosterError};

/// Default size of the top performer list.
pub const DEFAULT_TOP_PERFORMERS: usize = 5;

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub count: usize,
    /// Mean rating rounded to one decimal place, 0 for an empty roster
    pub average_rating: f64,
    pub high_performer_count: usize,
}

/// Per-department aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    pub department: Department,
    pub count: usize,
    pub average_rating: f64,
}

/// Number of employees holding one rating value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingBucket {
    pub rating: Rating,
    pub count: usize,
}

/// Rounds to one decimal place, halves away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn average(total: u64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        round_one_decimal(total as f64 / count as f64)
    }
}

pub fn statistics(roster: &[Employee]) -> Statistics {
    let total: u64 = roster.iter().map(|e| u64::from(e.rating.value())).sum();
    Statistics {
        count: roster.len(),
        average_rating: average(total, roster.len()),
        high_performer_count: roster.iter().filter(|e| e.is_high_performer()).count(),
    }
}

/// Groups by department in first-seen order.
pub fn department_breakdown(roster: &[Employee]) -> Vec<DepartmentSummary> {
    let mut order: Vec<Department> = Vec::new();
    let mut totals: HashMap<Department, (usize, u64)> = HashMap::new();

    for employee in roster {
        let entry = totals.entry(employee.department).or_insert_with(|| {
            order.push(employee.department);
            (0, 0)
        });
        entry.0 += 1;
        entry.1 += u64::from(employee.rating.value());
    }

    order
        .into_iter()
        .map(|department| {
            let (count, total) = totals.get(&department).copied().unwrap_or((0, 0));
            DepartmentSummary {
                department,
                count,
                average_rating: average(total, count),
            }
        })
        .collect()
}

/// Counts for every rating 1..=5, ascending.
pub fn rating_distribution(roster: &[Employee]) -> Vec<RatingBucket> {
    let mut counts = [0usize; Rating::ALL.len()];
    for employee in roster {
        counts[usize::from(employee.rating.value() - Rating::MIN)] += 1;
    }
    Rating::ALL
        .iter()
        .zip(counts)
        .map(|(rating, count)| RatingBucket {
            rating: *rating,
            count,
        })
        .collect()
}

/// High performers sorted by rating, best first, at most `n`.
///
/// The sort is stable, so equal ratings keep their roster order.
pub fn top_performers(roster: &[Employee], n: usize) -> Vec<&Employee> {
    let mut performers: Vec<&Employee> =
        roster.iter().filter(|e| e.is_high_performer()).collect();
    performers.sort_by(|a, b| b.rating.cmp(&a.rating));
    performers.truncate(n);
    performers
}

/// Bookmarked employees in roster order. Bookmarks for ids missing from
/// the roster are skipped.
pub fn bookmarked_employees<'a>(roster: &'a [Employee], bookmarks: &BookmarkSet) -> Vec<&'a Employee> {
    roster.iter().filter(|e| bookmarks.contains(e.id)).collect()
}

pub fn find_employee(roster: &[Employee], id: EmployeeId) -> Result<&Employee> {
    roster
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| RosterError::not_found("employee", id))
}
