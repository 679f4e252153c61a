//! Expense Ledger - personal expense tracking from the terminal
//!
//! This library provides the core functionality of the `ledger` command-line
//! tool. Entries are appended to one CSV file per calendar month and grouped
//! by a small, user-configured taxonomy of categories and subcategories.
//! Reports sum entries per category (or per subcategory when drilling into
//! one category) and render a table, a text bar chart and the net total.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Storage root resolution and the category taxonomy
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Entries, amounts and monthly periods
//! - `storage`: Month-partitioned, append-only CSV ledger
//! - `reports`: Aggregation and the expense report
//! - `display`: Table and bar chart rendering
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::config::{LedgerPaths, Taxonomy};
//! use expense_ledger::storage::Ledger;
//!
//! let paths = LedgerPaths::new(None)?;
//! let taxonomy = Taxonomy::load_or_create(&paths)?;
//! let entries = Ledger::new(paths).read_all(2026, Some(1))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
