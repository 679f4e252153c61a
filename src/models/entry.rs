//! Expense entry model
//!
//! An entry is one recorded expense or income transaction. Expenses carry a
//! negative amount, income a positive one.

use chrono::NaiveDate;

use super::money::Money;

/// Format used when writing dates to a ledger file (day, unpadded month, year)
pub const DATE_WRITE_FORMAT: &str = "%d-%-m-%Y";

/// Format used when parsing dates; day and month may be unpadded
pub const DATE_READ_FORMAT: &str = "%d-%m-%Y";

/// Stored in place of empty details
pub const DETAILS_NOT_AVAILABLE: &str = "not available";

/// A single expense or income entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Calendar day of the transaction
    pub date: NaiveDate,
    /// Free-text title
    pub title: String,
    /// Category name
    pub category: String,
    /// Subcategory name within the category
    pub subcategory: String,
    /// Free-text details, or "not available"
    pub details: String,
    /// Signed amount: negative for expenses, positive for income
    pub amount: Money,
}

impl Entry {
    /// Date as written to the ledger, e.g. "05-1-2026"
    pub fn date_string(&self) -> String {
        format_entry_date(self.date)
    }
}

/// Expense or income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryKind {
    #[default]
    Expense,
    Income,
}

impl EntryKind {
    /// Apply this kind's sign to a non-negative magnitude
    pub fn signed(self, magnitude: Money) -> Money {
        let magnitude = magnitude.abs();
        match self {
            EntryKind::Expense => -magnitude,
            EntryKind::Income => magnitude,
        }
    }
}

/// Normalize user-entered details, mapping blanks and "NA" to the sentinel
pub fn normalize_details(details: &str) -> String {
    let trimmed = details.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("na") {
        DETAILS_NOT_AVAILABLE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format a date the way ledger files store it
pub fn format_entry_date(date: NaiveDate) -> String {
    date.format(DATE_WRITE_FORMAT).to_string()
}

/// Parse a ledger date such as "05-1-2026" or "5-01-2026"
pub fn parse_entry_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_READ_FORMAT).ok()
}
