//! Path management for the expense ledger
//!
//! Resolves where the category configuration and the monthly ledger files live.
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (the `--data-dir` flag or `LEDGER_DATA_DIR`)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/expense-ledger` or `~/.config/expense-ledger`
//! 3. Windows: `%APPDATA%\expense-ledger`

use std::path::{Path, PathBuf};

use crate::error::LedgerError;
use crate::models::Period;

const APP_DIR_NAME: &str = "expense-ledger";

/// Manages all paths used by the expense ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Root directory holding the settings file and the ledger directory
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Create a new LedgerPaths instance
    ///
    /// Uses `explicit` when given, otherwise the platform default.
    ///
    /// # Errors
    ///
    /// Returns an error if no explicit directory is given and the home
    /// directory cannot be determined.
    pub fn new(explicit: Option<PathBuf>) -> Result<Self, LedgerError> {
        let base_dir = match explicit {
            Some(dir) => dir,
            None => resolve_default_path()?,
        };

        Ok(Self::with_base_dir(base_dir))
    }

    /// Create LedgerPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the category configuration file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.conf")
    }

    /// Get the directory holding one ledger file per month
    pub fn expenses_dir(&self) -> PathBuf {
        self.base_dir.join("expenses")
    }

    /// Get the ledger file for a period, e.g. `expenses/1_2026.csv`
    ///
    /// Pure path computation; nothing is touched on disk.
    pub fn ledger_file(&self, period: Period) -> PathBuf {
        self.expenses_dir().join(ledger_file_name(period))
    }

    /// Ensure the base and ledger directories exist
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create base directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })?;

        let expenses = self.expenses_dir();
        std::fs::create_dir_all(&expenses).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create ledger directory {}: {}",
                expenses.display(),
                e
            ))
        })?;

        Ok(())
    }
}

/// File name of the ledger for a period: unpadded month, underscore, year
pub fn ledger_file_name(period: Period) -> String {
    format!("{}_{}.csv", period.month(), period.year())
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                LedgerError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join(APP_DIR_NAME))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| LedgerError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
}
