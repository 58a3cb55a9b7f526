//! First-run setup
//!
//! Creates the directory layout, empty record files and the settings file.

use crate::config::paths::FinbeePaths;
use crate::config::settings::Settings;
use crate::error::FinbeeError;
use crate::models::UserId;

use super::records::{ExpenseRepository, IncomeRepository};

/// Initialize storage for a fresh installation
///
/// Existing record files and settings are left untouched, so running it
/// twice is harmless. `default_user` replaces the stored default user when
/// given. Returns the resulting settings.
pub fn initialize_storage(
    paths: &FinbeePaths,
    default_user: Option<UserId>,
) -> Result<Settings, FinbeeError> {
    paths.ensure_directories()?;

    if !paths.incomes_file().exists() {
        IncomeRepository::new(paths.incomes_file()).save()?;
    }
    if !paths.expenses_file().exists() {
        ExpenseRepository::new(paths.expenses_file()).save()?;
    }

    let mut settings = Settings::load_or_create(paths)?;
    if let Some(user) = default_user {
        settings.default_user = user;
    }
    settings.setup_completed = true;
    settings.save(paths)?;

    Ok(settings)
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &FinbeePaths) -> bool {
    !paths.settings_file().exists()
}
