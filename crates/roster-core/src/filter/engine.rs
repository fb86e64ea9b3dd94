//! Pure filter over the roster.
//!
//! Stateless: every call recomputes from the roster and filter it is given,
//! in a single pass, so it is cheap enough to run per keystroke.

use super::model::FilterState;
use crate::employee::Employee;

/// Lowercased query, prepared once per filter pass.
struct TextQuery(String);

impl TextQuery {
    fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    fn matches(&self, employee: &Employee) -> bool {
        if self.0.is_empty() {
            return true;
        }
        [
            employee.first_name.as_str(),
            employee.last_name.as_str(),
            employee.email.as_str(),
            employee.department.as_ref(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&self.0))
    }
}

fn passes(query: &TextQuery, employee: &Employee, filter: &FilterState) -> bool {
    query.matches(employee)
        && filter.department_filter.matches(employee.department)
        && filter.rating_filter.matches(employee.rating)
}

/// True when `employee` passes all three predicates.
pub fn matches(employee: &Employee, filter: &FilterState) -> bool {
    passes(&TextQuery::new(&filter.search_term), employee, filter)
}

/// Visible subset of `roster` under `filter`, in roster order.
pub fn visible_roster<'a>(roster: &'a [Employee], filter: &FilterState) -> Vec<&'a Employee> {
    let query = TextQuery::new(&filter.search_term);
    roster
        .iter()
        .filter(|e| passes(&query, e, filter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::{Address, Department, Rating};
    use crate::filter::{DepartmentFilter, RatingFilter};

    fn employee(id: u32, first: &str, department: Department, rating: u8) -> Employee {
        Employee {
            id,
            first_name: first.to_string(),
            last_name: "Smith".to_string(),
            email: format!("{}@corp.example", first.to_lowercase()),
            age: 30,
            department,
            rating: Rating::new(rating).unwrap(),
            phone: String::new(),
            address: Address::default(),
            image: String::new(),
            company: None,
        }
    }

    fn roster() -> Vec<Employee> {
        vec![
            employee(1, "Ada", Department::Engineering, 5),
            employee(2, "Bob", Department::Sales, 2),
            employee(3, "Cleo", Department::Hr, 4),
            employee(4, "Dan", Department::Engineering, 3),
        ]
    }

    fn ids(visible: &[&Employee]) -> Vec<u32> {
        visible.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_neutral_filter_keeps_everything_in_order() {
        let roster = roster();
        assert_eq!(ids(&visible_roster(&roster, &FilterState::default())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_department_filter_scenario() {
        let roster = vec![
            employee(1, "Ada", Department::Engineering, 5),
            employee(2, "Bob", Department::Sales, 2),
        ];
        let filter = FilterState {
            department_filter: DepartmentFilter::Only(Department::Engineering),
            ..FilterState::default()
        };
        assert_eq!(ids(&visible_roster(&roster, &filter)), vec![1]);
    }

    #[test]
    fn test_text_query_is_case_insensitive_across_fields() {
        let roster = roster();
        let by_name = FilterState {
            search_term: "CLEO".to_string(),
            ..FilterState::default()
        };
        assert_eq!(ids(&visible_roster(&roster, &by_name)), vec![3]);

        let by_department = FilterState {
            search_term: "engin".to_string(),
            ..FilterState::default()
        };
        assert_eq!(ids(&visible_roster(&roster, &by_department)), vec![1, 4]);

        let by_email = FilterState {
            search_term: "bob@corp".to_string(),
            ..FilterState::default()
        };
        assert_eq!(ids(&visible_roster(&roster, &by_email)), vec![2]);

        let by_department_hr = FilterState {
            search_term: "hr".to_string(),
            ..FilterState::default()
        };
        assert_eq!(ids(&visible_roster(&roster, &by_department_hr)), vec![3]);
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let roster = roster();
        let filter = FilterState {
            search_term: "smith".to_string(),
            department_filter: DepartmentFilter::Only(Department::Engineering),
            rating_filter: RatingFilter::Exactly(Rating::new(3).unwrap()),
        };
        assert_eq!(ids(&visible_roster(&roster, &filter)), vec![4]);
        assert!(matches(&roster[3], &filter));
        assert!(!matches(&roster[0], &filter));
    }

    #[test]
    fn test_no_match_yields_empty() {
        let roster = roster();
        let filter = FilterState {
            search_term: "zzz".to_string(),
            ..FilterState::default()
        };
        assert!(visible_roster(&roster, &filter).is_empty());
    }

    #[test]
    fn test_visible_roster_is_ordered_subset_for_every_filter() {
        let roster = roster();
        let departments = std::iter::once(DepartmentFilter::All)
            .chain(Department::ALL.iter().copied().map(DepartmentFilter::Only));
        for department_filter in departments {
            let ratings = std::iter::once(RatingFilter::All)
                .chain(Rating::ALL.iter().copied().map(RatingFilter::Exactly));
            for rating_filter in ratings {
                for search_term in ["", "a", "SMITH", "x"] {
                    let filter = FilterState {
                        search_term: search_term.to_string(),
                        department_filter,
                        rating_filter,
                    };
                    let positions: Vec<usize> = visible_roster(&roster, &filter)
                        .iter()
                        .map(|v| roster.iter().position(|e| e.id == v.id).unwrap())
                        .collect();
                    assert!(positions.windows(2).all(|w| w[0] < w[1]));
                }
            }
        }
    }
}
