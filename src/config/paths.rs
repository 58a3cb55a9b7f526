//! Path management for FinBEE
//!
//! ## Path Resolution Order
//!
//! 1. `FINBEE_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by `directories`
//!    (`~/.config/finbee` on Linux, `~/Library/Application Support/finbee`
//!    on macOS, `%APPDATA%\finbee` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinbeeError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FINBEE_DATA_DIR";

/// Locations of the settings file, record files and audit log
#[derive(Debug, Clone)]
pub struct FinbeePaths {
    base_dir: PathBuf,
}

impl FinbeePaths {
    /// Resolve the base directory from the environment or platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FinbeeError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Paths rooted at an explicit directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// JSONL audit log, kept beside `config.json`
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    pub fn incomes_file(&self) -> PathBuf {
        self.data_dir().join("incomes.json")
    }

    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FinbeeError> {
        // data/ lives under the base directory, so one call creates both
        std::fs::create_dir_all(self.data_dir()).map_err(|e| {
            FinbeeError::Io(format!(
                "Failed to create {}: {}",
                self.data_dir().display(),
                e
            ))
        })
    }

    /// `finbee init` has written `config.json`
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, FinbeeError> {
    ProjectDirs::from("", "", "finbee")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FinbeeError::Config("Could not determine home directory".into()))
}
