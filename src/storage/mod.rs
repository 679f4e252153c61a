//! Storage layer for the expense ledger
//!
//! Entries are kept in one CSV file per calendar month under the ledger
//! directory. Files are created lazily on first append and only ever grow.
//! A missing file reads as an empty month; write failures are always errors.

pub mod file_io;

pub use file_io::{append_record, read_entries, LedgerRecord, LEDGER_HEADER};

use std::path::PathBuf;

use tracing::debug;

use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Entry, Period};

/// Month-partitioned, append-only entry storage
#[derive(Debug, Clone)]
pub struct Ledger {
    paths: LedgerPaths,
}

impl Ledger {
    /// Create a ledger rooted at the given paths; nothing is touched on disk
    pub fn new(paths: LedgerPaths) -> Self {
        Self { paths }
    }

    /// Location of the file holding a period's entries
    pub fn path_for(&self, period: Period) -> PathBuf {
        self.paths.ledger_file(period)
    }

    /// Append one entry to the period's file, creating directory and file
    /// (with header) as needed
    pub fn append(&self, period: Period, entry: &Entry) -> LedgerResult<()> {
        self.paths.ensure_directories()?;

        let path = self.path_for(period);
        append_record(&path, &LedgerRecord::from(entry))?;

        debug!(path = %path.display(), title = %entry.title, "appended entry");
        Ok(())
    }

    /// Read one period's entries in append order; empty if the file is absent
    pub fn read_period(&self, period: Period) -> LedgerResult<Vec<Entry>> {
        Ok(read_entries(&self.path_for(period))?.unwrap_or_default())
    }

    /// Read a single month when `month` is given, otherwise all twelve
    /// months of `year` concatenated January first
    pub fn read_all(&self, year: i32, month: Option<u32>) -> LedgerResult<Vec<Entry>> {
        match month {
            Some(month) => {
                let period = Period::new(year, month)
                    .map_err(|e| LedgerError::Validation(e.to_string()))?;
                self.read_period(period)
            }
            None => {
                let mut entries = Vec::new();
                for period in Period::months_of(year) {
                    entries.extend(self.read_period(period)?);
                }
                Ok(entries)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, DETAILS_NOT_AVAILABLE};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_ledger() -> (TempDir, Ledger) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, Ledger::new(paths))
    }

    fn entry(period: Period, day: u32, title: &str, cents: i64) -> Entry {
        Entry {
            date: period.date(day).unwrap(),
            title: title.into(),
            category: "Food".into(),
            subcategory: "Groceries".into(),
            details: DETAILS_NOT_AVAILABLE.into(),
            amount: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_new_does_not_create_directories() {
        let (temp_dir, _ledger) = create_test_ledger();
        assert!(!temp_dir.path().join("expenses").exists());
    }

    #[test]
    fn test_append_then_read_round_trip() {
        let (_temp_dir, ledger) = create_test_ledger();
        let jan = Period::new(2026, 1).unwrap();

        let written = vec![
            entry(jan, 20, "Late", -1000),
            entry(jan, 3, "Early", -550),
            entry(jan, 15, "Salary", 200000),
        ];
        for e in &written {
            ledger.append(jan, e).unwrap();
        }

        let read = ledger.read_period(jan).unwrap();
        assert_eq!(read, written);
    }

    #[test]
    fn test_header_written_exactly_once() {
        let (_temp_dir, ledger) = create_test_ledger();
        let jan = Period::new(2026, 1).unwrap();

        ledger.append(jan, &entry(jan, 1, "a", -100)).unwrap();
        ledger.append(jan, &entry(jan, 2, "b", -200)).unwrap();

        let contents = std::fs::read_to_string(ledger.path_for(jan)).unwrap();
        let headers = contents
            .lines()
            .filter(|l| *l == "Date,Title,Type,Subtype,Details,Amount")
            .count();
        assert_eq!(headers, 1);
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_read_absent_period_is_empty() {
        let (_temp_dir, ledger) = create_test_ledger();
        assert!(ledger.read_all(2026, Some(5)).unwrap().is_empty());
        assert!(ledger.read_all(2026, None).unwrap().is_empty());
    }

    #[test]
    fn test_read_all_year_is_month_ascending() {
        let (_temp_dir, ledger) = create_test_ledger();
        let mar = Period::new(2026, 3).unwrap();
        let jan = Period::new(2026, 1).unwrap();
        let other_year = Period::new(2025, 2).unwrap();

        ledger.append(mar, &entry(mar, 1, "march", -100)).unwrap();
        ledger.append(jan, &entry(jan, 1, "january", -100)).unwrap();
        ledger
            .append(other_year, &entry(other_year, 1, "old", -100))
            .unwrap();

        let titles: Vec<_> = ledger
            .read_all(2026, None)
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["january", "march"]);
    }

    #[test]
    fn test_read_all_rejects_bad_month() {
        let (_temp_dir, ledger) = create_test_ledger();
        let err = ledger.read_all(2026, Some(13)).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_bad_amount_row_dropped_others_kept() {
        let (_temp_dir, ledger) = create_test_ledger();
        let jan = Period::new(2026, 1).unwrap();
        ledger.append(jan, &entry(jan, 1, "first", -100)).unwrap();

        let mut contents = std::fs::read_to_string(ledger.path_for(jan)).unwrap();
        contents.push_str("02-1-2026,broken,Food,Groceries,NA,twelve\n");
        std::fs::write(ledger.path_for(jan), contents).unwrap();
        ledger.append(jan, &entry(jan, 3, "third", -300)).unwrap();

        let titles: Vec<_> = ledger
            .read_period(jan)
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["first", "third"]);
    }

    #[test]
    fn test_append_to_unwritable_location_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        // a regular file where the base directory should be
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let ledger = Ledger::new(LedgerPaths::with_base_dir(blocker));
        let jan = Period::new(2026, 1).unwrap();

        let err = ledger.append(jan, &entry(jan, 1, "x", -1)).unwrap_err();
        assert!(err.is_storage());
    }

    #[test]
    fn test_entry_dates_survive_round_trip() {
        let (_temp_dir, ledger) = create_test_ledger();
        let dec = Period::new(2025, 12).unwrap();
        ledger.append(dec, &entry(dec, 31, "nye", -4200)).unwrap();

        let read = ledger.read_period(dec).unwrap();
        assert_eq!(read[0].date, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }
}
