//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. A missing ledger file is not an error: the
//! storage layer reports it as an empty entry list.

use thiserror::Error;

/// The main error type for expense ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Category configuration is malformed or unreadable
    #[error("Configuration error: {0}")]
    Config(String),

    /// User input failed validation (bad date, number or selection)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Ledger directory or file could not be created, written or read
    #[error("Storage error: {0}")]
    Storage(String),

    /// Terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl LedgerError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for expense ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
