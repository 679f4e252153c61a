//! Core data models for the expense ledger
//!
//! This module contains the data structures of the bookkeeping domain:
//! entries, signed amounts and monthly periods.

pub mod entry;
pub mod money;
pub mod period;

pub use entry::{Entry, EntryKind, DETAILS_NOT_AVAILABLE};
pub use money::Money;
pub use period::Period;
