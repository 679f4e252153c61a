//! CSV file helpers for ledger files
//!
//! A ledger file is a comma-delimited file with a header row followed by one
//! row per entry in append order. Rows are only ever appended; nothing here
//! rewrites an existing row.

use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::entry::{format_entry_date, parse_entry_date};
use crate::models::{Entry, Money};

/// Header row of every ledger file
pub const LEDGER_HEADER: [&str; 6] = ["Date", "Title", "Type", "Subtype", "Details", "Amount"];

/// One ledger row as raw strings, in column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub date: String,
    pub title: String,
    pub category: String,
    pub subcategory: String,
    pub details: String,
    pub amount: String,
}

impl From<&Entry> for LedgerRecord {
    fn from(entry: &Entry) -> Self {
        Self {
            date: format_entry_date(entry.date),
            title: entry.title.clone(),
            category: entry.category.clone(),
            subcategory: entry.subcategory.clone(),
            details: entry.details.clone(),
            amount: entry.amount.to_ledger_string(),
        }
    }
}

impl LedgerRecord {
    /// Convert to an entry, failing on an unparseable date or amount
    pub fn into_entry(self) -> Result<Entry, RecordError> {
        let date = parse_entry_date(&self.date).ok_or(RecordError::Date(self.date.clone()))?;
        let amount =
            Money::parse(&self.amount).map_err(|_| RecordError::Amount(self.amount.clone()))?;

        Ok(Entry {
            date,
            title: self.title,
            category: self.category,
            subcategory: self.subcategory,
            details: self.details,
            amount,
        })
    }
}

/// Why a stored row could not be turned into an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    Date(String),
    Amount(String),
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::Date(s) => write!(f, "invalid date '{}'", s),
            RecordError::Amount(s) => write!(f, "invalid amount '{}'", s),
        }
    }
}

/// Append one record, writing the header first if the file is new or empty
///
/// The file is opened, written and closed within this call.
pub fn append_record(path: &Path, record: &LedgerRecord) -> LedgerResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;

    let is_new = file
        .metadata()
        .map_err(|e| LedgerError::Storage(format!("Failed to stat {}: {}", path.display(), e)))?
        .len()
        == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if is_new {
        writer.write_record(LEDGER_HEADER).map_err(|e| {
            LedgerError::Storage(format!("Failed to write header to {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "created ledger file");
    }

    writer.serialize(record).map_err(|e| {
        LedgerError::Storage(format!("Failed to write to {}: {}", path.display(), e))
    })?;

    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Read every valid entry from a ledger file
///
/// Returns `Ok(None)` if the file does not exist. Rows that cannot be parsed
/// are logged and skipped; only I/O failures are errors. A first line that is
/// not the header is read as an entry.
pub fn read_entries(path: &Path) -> LedgerResult<Option<Vec<Entry>>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(LedgerError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut entries = Vec::new();
    let mut record = csv::StringRecord::new();
    let mut first_row = true;

    loop {
        match reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {}
            Err(e) if e.is_io_error() => {
                return Err(LedgerError::Storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable row");
                continue;
            }
        }

        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if std::mem::take(&mut first_row) {
            if is_header(&record) {
                continue;
            }
            warn!(path = %path.display(), "ledger file has no header row");
        }

        if record.len() != LEDGER_HEADER.len() {
            warn!(
                path = %path.display(),
                line,
                fields = record.len(),
                "skipping row with wrong number of fields"
            );
            continue;
        }

        let parsed = record
            .deserialize::<LedgerRecord>(None)
            .map_err(|e| e.to_string())
            .and_then(|raw| raw.into_entry().map_err(|e| e.to_string()));

        match parsed {
            Ok(entry) => entries.push(entry),
            Err(reason) => {
                warn!(path = %path.display(), line, %reason, "skipping invalid row");
            }
        }
    }

    debug!(path = %path.display(), rows = entries.len(), "read ledger file");
    Ok(Some(entries))
}

fn is_header(record: &csv::StringRecord) -> bool {
    record.iter().map(str::trim).eq(LEDGER_HEADER)
}
