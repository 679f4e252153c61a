//! Expense Report
//!
//! Combines the entry table, the bar chart of totals and the net balance for
//! one month or a whole year, optionally drilled down into one category.

use std::fmt;

use crate::display::{render_bar_chart, render_table};
use crate::models::{Entry, Money, Period};

use super::aggregate::{aggregate, total, Bucket, GroupBy};

/// Time range covered by a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportScope {
    Month(Period),
    Year(i32),
}

impl ReportScope {
    /// Scope for `view --year Y [--month M]`
    pub fn from_parts(year: i32, month: Option<Period>) -> Self {
        match month {
            Some(period) => ReportScope::Month(period),
            None => ReportScope::Year(year),
        }
    }
}

impl fmt::Display for ReportScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportScope::Month(period) => write!(f, "{}", period),
            ReportScope::Year(year) => write!(f, "{}", year),
        }
    }
}

/// Summary of the entries in a scope
#[derive(Debug, Clone)]
pub struct ExpenseReport {
    /// Period covered
    pub scope: ReportScope,
    /// Category filter, if drilling down
    pub category: Option<String>,
    /// Entries that passed the filter, in ledger order
    pub entries: Vec<Entry>,
    /// Grouping used for the chart
    pub group_by: GroupBy,
    /// Totals per label
    pub bucket: Bucket,
    /// Signed sum of every entry in scope
    pub net_total: Money,
}

impl ExpenseReport {
    /// Build a report from the entries of a scope
    ///
    /// Without a category the totals are per category; with one, only that
    /// category's entries count and the totals are per subcategory.
    pub fn generate(entries: Vec<Entry>, scope: ReportScope, category: Option<&str>) -> Self {
        let entries: Vec<Entry> = match category {
            Some(c) => entries.into_iter().filter(|e| e.category == c).collect(),
            None => entries,
        };

        let group_by = if category.is_some() {
            GroupBy::Subcategory
        } else {
            GroupBy::Category
        };

        let bucket = aggregate(&entries, group_by, category);
        let net_total = total(&entries);

        Self {
            scope,
            category: category.map(str::to_string),
            entries,
            group_by,
            bucket,
            net_total,
        }
    }

    /// Title shown above the chart
    pub fn chart_title(&self) -> String {
        match &self.category {
            Some(category) => format!(
                "{} by {}, {}",
                category,
                self.group_by.label(),
                self.scope
            ),
            None => format!("Totals by {}, {}", self.group_by.label(), self.scope),
        }
    }

    /// Check if no entry falls in the report
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return match &self.category {
                Some(category) => format!("No {} entries found for {}.\n", category, self.scope),
                None => format!("No entries found for {}.\n", self.scope),
            };
        }

        let mut output = String::new();
        output.push_str(&render_table(&self.entries, None));
        output.push('\n');
        output.push_str(&render_bar_chart(&self.bucket, &self.chart_title()));
        output.push('\n');
        output.push_str(&format!("Net total: {}\n", self.net_total));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DETAILS_NOT_AVAILABLE;
    use chrono::NaiveDate;

    fn entry(title: &str, category: &str, sub: &str, amount: &str) -> Entry {
        Entry {
            date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            title: title.into(),
            category: category.into(),
            subcategory: sub.into(),
            details: DETAILS_NOT_AVAILABLE.into(),
            amount: Money::parse(amount).unwrap(),
        }
    }

    fn january() -> ReportScope {
        ReportScope::Month(Period::new(2026, 1).unwrap())
    }

    fn sample() -> Vec<Entry> {
        vec![
            entry("Bread", "Food", "Groceries", "-10.00"),
            entry("Chips", "Food", "Snacks", "-5.50"),
            entry("Cab", "Transport", "Taxi", "-20.00"),
            entry("Pay", "Work", "Salary", "2000"),
        ]
    }

    #[test]
    fn test_report_by_category() {
        let report = ExpenseReport::generate(sample(), january(), None);

        assert_eq!(report.group_by, GroupBy::Category);
        assert_eq!(report.entries.len(), 4);
        assert_eq!(report.bucket.get("Food"), Some(Money::parse("-15.50").unwrap()));
        assert_eq!(report.net_total, Money::parse("1964.50").unwrap());
        assert_eq!(report.chart_title(), "Totals by category, January 2026");
    }

    #[test]
    fn test_category_filter_restricts_everything() {
        let report = ExpenseReport::generate(sample(), ReportScope::Year(2026), Some("Food"));

        assert_eq!(report.group_by, GroupBy::Subcategory);
        assert!(report.entries.iter().all(|e| e.category == "Food"));
        assert_eq!(report.net_total, Money::parse("-15.50").unwrap());
        assert_eq!(report.bucket.len(), 2);
        assert_eq!(report.bucket.get("Taxi"), None);
        assert_eq!(report.chart_title(), "Food by subcategory, 2026");

        let output = report.format_terminal();
        assert!(output.contains("Bread"));
        assert!(!output.contains("Cab"));
        assert!(!output.contains("Salary"));
        assert!(output.contains("Net total: -15.50"));
    }

    #[test]
    fn test_terminal_output_sections() {
        let output = ExpenseReport::generate(sample(), january(), None).format_terminal();

        assert!(output.contains("Title"));
        assert!(output.contains("Totals by category, January 2026"));
        assert!(output.ends_with("Net total: 1964.50\n"));

        let chart_order: Vec<usize> = ["Work", "Transport", "Food"]
            .iter()
            .map(|label| {
                output
                    .lines()
                    .position(|l| l.trim_start().starts_with(label))
                    .unwrap()
            })
            .collect();
        assert!(chart_order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_notices() {
        let report = ExpenseReport::generate(Vec::new(), january(), None);
        assert_eq!(report.format_terminal(), "No entries found for January 2026.\n");

        let report = ExpenseReport::generate(sample(), ReportScope::Year(2026), Some("Rent"));
        assert_eq!(report.format_terminal(), "No Rent entries found for 2026.\n");
        assert!(report.net_total.is_zero());
    }
}
