//! Reports module for the expense ledger
//!
//! Aggregates entries into per-label totals and assembles the terminal
//! report shown by `view`.

pub mod aggregate;
pub mod expense;

pub use aggregate::{aggregate, total, Bucket, GroupBy};
pub use expense::{ExpenseReport, ReportScope};
