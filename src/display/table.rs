//! Entry table rendering
//!
//! Column widths fit the widest cell of each column plus fixed padding.

use super::report::{display_width, format_header, left_align, right_align, separator};
use crate::models::Entry;

const HEADERS: [&str; 5] = ["Date", "Title", "Type", "Subtype", "Amount"];
const AMOUNT_COLUMN: usize = 4;

/// Spaces added to the widest cell of every column
pub const COLUMN_PADDING: usize = 2;

/// One displayed row, every cell already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    cells: [String; 5],
}

impl TableRow {
    fn from_entry(entry: &Entry) -> Self {
        Self {
            cells: [
                entry.date_string(),
                entry.title.clone(),
                entry.category.clone(),
                entry.subcategory.clone(),
                entry.amount.to_string(),
            ],
        }
    }

    pub fn cells(&self) -> &[String; 5] {
        &self.cells
    }
}

/// Rows for the table, optionally restricted to one category
pub fn table_rows(entries: &[Entry], category: Option<&str>) -> Vec<TableRow> {
    entries
        .iter()
        .filter(|e| category.map_or(true, |c| e.category == c))
        .map(TableRow::from_entry)
        .collect()
}

/// Render entries as a table with a bold header and dash rules
///
/// Returns a notice instead of a table when no row matches.
pub fn render_table(entries: &[Entry], category: Option<&str>) -> String {
    let rows = table_rows(entries, category);
    if rows.is_empty() {
        return "No entries to display.\n".to_string();
    }

    let mut widths = HEADERS.map(display_width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.cells.iter()) {
            *width = (*width).max(display_width(cell));
        }
    }
    let widths = widths.map(|w| w + COLUMN_PADDING);
    let total_width: usize = widths.iter().sum();

    let mut output = String::new();

    let header: String = HEADERS
        .iter()
        .zip(widths.iter())
        .enumerate()
        .map(|(i, (title, &width))| align_cell(i, title, width))
        .collect();
    output.push_str(&format_header(header.trim_end()));
    output.push('\n');
    output.push_str(&separator(total_width));
    output.push('\n');

    for row in &rows {
        let line: String = row
            .cells
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(i, (cell, &width))| align_cell(i, cell, width))
            .collect();
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output.push_str(&separator(total_width));
    output.push('\n');
    output
}

fn align_cell(column: usize, text: &str, width: usize) -> String {
    if column == AMOUNT_COLUMN {
        right_align(text, width)
    } else {
        left_align(text, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, DETAILS_NOT_AVAILABLE};
    use chrono::NaiveDate;

    fn entry(title: &str, category: &str, sub: &str, cents: i64) -> Entry {
        Entry {
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            title: title.into(),
            category: category.into(),
            subcategory: sub.into(),
            details: DETAILS_NOT_AVAILABLE.into(),
            amount: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_rows_follow_entry_order_and_filter() {
        let entries = vec![
            entry("Bread", "Food", "Groceries", -250),
            entry("Bus", "Transport", "Public Transport", -180),
            entry("Chips", "Food", "Snacks", -120),
        ];

        let rows = table_rows(&entries, Some("Food"));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells()[1], "Bread");
        assert_eq!(rows[1].cells()[4], "-1.20");

        assert_eq!(table_rows(&entries, None).len(), 3);
    }

    #[test]
    fn test_layout_widths_and_rules() {
        let entries = vec![
            entry("Weekly groceries", "Food", "Groceries", -4215),
            entry("Pay", "Work", "Salary", 200000),
        ];
        let output = render_table(&entries, None);
        let lines: Vec<&str> = output.lines().collect();

        // Date(9)+2, Title(16)+2, Type(4)+2, Subtype(9)+2, Amount(7)+2
        let expected_width = 11 + 18 + 6 + 11 + 9;
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "-".repeat(expected_width));
        assert_eq!(lines[4], lines[1]);
        assert!(lines[0].contains("Date"));
        assert!(lines[0].contains("Subtype"));
        assert!(lines[2].starts_with("05-1-2026  Weekly groceries  Food  Groceries"));
        assert!(lines[2].ends_with("-42.15"));
        assert!(lines[3].ends_with("2000.00"));
        assert_eq!(
            display_width(lines[2]),
            display_width(lines[3]),
            "amount column is right-aligned"
        );
    }

    #[test]
    fn test_empty_table_notice() {
        let entries = vec![entry("Bus", "Transport", "Taxi", -100)];
        assert_eq!(
            render_table(&entries, Some("Food")),
            "No entries to display.\n"
        );
    }
}
