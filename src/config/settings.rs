//! User settings for FinBEE
//!
//! Manages user preferences: display currency, date format and the user
//! whose records are used when none is given on the command line.

use serde::{Deserialize, Serialize};

use super::paths::FinbeePaths;
use crate::error::FinbeeError;
use crate::models::UserId;
use crate::storage::{read_json, write_json_atomic};

/// Contents of `config.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Prefixed to every amount in reports
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// strftime pattern accepted for `--date` alongside ISO dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Active user when neither `--user` nor `FINBEE_USER` is set
    #[serde(default)]
    pub default_user: UserId,

    #[serde(default)]
    pub setup_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_user: UserId::default(),
            setup_completed: false,
        }
    }
}

impl Settings {
    /// Read `config.json`, falling back to defaults without writing anything
    pub fn load_or_create(paths: &FinbeePaths) -> Result<Self, FinbeeError> {
        read_json(paths.settings_file())
            .map_err(|e| FinbeeError::Config(format!("Unreadable settings: {}", e)))
    }

    pub fn save(&self, paths: &FinbeePaths) -> Result<(), FinbeeError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Resolve the active user: an explicit choice wins over the default
    pub fn resolve_user(&self, explicit: Option<&str>) -> Result<UserId, FinbeeError> {
        match explicit {
            Some(name) => UserId::parse(name).map_err(|e| FinbeeError::Validation(e.to_string())),
            None => Ok(self.default_user.clone()),
        }
    }
}
