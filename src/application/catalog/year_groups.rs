//! Year grouping for travel listings.
//!
//! Items are partitioned by the year of their start date. Groups come out
//! most recent year first; inside a group items keep their incoming order.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use utoipa::ToSchema;

/// Anything placed on a calendar by its start date.
pub trait Dated {
    fn start_date(&self) -> NaiveDate;

    fn year(&self) -> i32 {
        self.start_date().year()
    }
}

/// Items sharing a start year.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct YearGroup<T> {
    pub year: i32,
    pub travels: Vec<T>,
}

/// Ordered year → items mapping with years strictly descending.
#[derive(Debug, Clone, PartialEq)]
pub struct YearGroups<T> {
    groups: Vec<YearGroup<T>>,
}

impl<T: Dated> YearGroups<T> {
    pub fn group(items: impl IntoIterator<Item = T>) -> Self {
        let mut by_year: BTreeMap<i32, Vec<T>> = BTreeMap::new();
        for item in items {
            by_year.entry(item.year()).or_default().push(item);
        }
        let groups = by_year
            .into_iter()
            .rev()
            .map(|(year, travels)| YearGroup { year, travels })
            .collect();
        Self { groups }
    }
}

impl<T> YearGroups<T> {
    /// Distinct years present, descending; drives the navigation index.
    pub fn years(&self) -> Vec<i32> {
        self.groups.iter().map(|g| g.year).collect()
    }

    pub fn into_groups(self) -> Vec<YearGroup<T>> {
        self.groups
    }
}

impl<T: Dated> FromIterator<T> for YearGroups<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::group(iter)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        label: &'static str,
        start: NaiveDate,
    }

    impl Dated for Item {
        fn start_date(&self) -> NaiveDate {
            self.start
        }
    }

    fn item(label: &'static str, y: i32, m: u32) -> Item {
        Item {
            label,
            start: NaiveDate::from_ymd_opt(y, m, 1).unwrap(),
        }
    }

    fn labels(groups: &YearGroups<Item>, year: i32) -> Vec<&'static str> {
        groups
            .groups
            .iter()
            .find(|g| g.year == year)
            .map(|g| g.travels.iter().map(|i| i.label).collect())
            .unwrap_or_default()
    }

    #[test]
    fn groups_mixed_years_most_recent_first() {
        let groups: YearGroups<Item> =
            vec![item("trip0", 2024, 5), item("trip1", 2023, 8), item("trip2", 2024, 1)]
                .into_iter()
                .collect();

        assert_eq!(groups.years(), vec![2024, 2023]);
        assert_eq!(labels(&groups, 2024), vec!["trip0", "trip2"]);
        assert_eq!(labels(&groups, 2023), vec!["trip1"]);
    }

    #[test]
    fn empty_input_gives_no_groups() {
        let groups = YearGroups::<Item>::group(Vec::new());
        assert!(groups.years().is_empty());
        assert!(groups.into_groups().is_empty());
    }

    #[test]
    fn single_year_gives_single_group() {
        let groups = YearGroups::group(vec![item("a", 2025, 3), item("b", 2025, 11)]);
        assert_eq!(groups.years(), vec![2025]);
        assert_eq!(labels(&groups, 2025), vec!["a", "b"]);
    }

    #[test]
    fn every_item_lands_once_under_its_year() {
        let input = vec![
            item("a", 2021, 1),
            item("b", 2026, 2),
            item("c", 2021, 3),
            item("d", 2019, 4),
            item("e", 2026, 5),
            item("f", 2022, 6),
            item("g", 2019, 7),
        ];
        let groups = YearGroups::group(input.clone());
        let years = groups.years();

        assert!(years.windows(2).all(|w| w[0] > w[1]));
        let mut distinct: Vec<i32> = input.iter().map(Dated::year).collect();
        distinct.sort_unstable_by(|a, b| b.cmp(a));
        distinct.dedup();
        assert_eq!(years, distinct);

        for year in years {
            let expected: Vec<&str> = input
                .iter()
                .filter(|i| i.year() == year)
                .map(|i| i.label)
                .collect();
            assert_eq!(labels(&groups, year), expected);
        }
        let total: usize = groups.into_groups().iter().map(|g| g.travels.len()).sum();
        assert_eq!(total, input.len());
    }
}
