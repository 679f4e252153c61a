//! Configuration module for the expense ledger
//!
//! This module provides:
//! - Storage root and ledger file path resolution
//! - The category taxonomy loaded from `settings.conf`

pub mod paths;
pub mod taxonomy;

pub use paths::LedgerPaths;
pub use taxonomy::{CategoryEntry, Taxonomy};
