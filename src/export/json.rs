//! JSON Export functionality
//!
//! Exports one user's records to JSON with schema versioning.

use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics;
use crate::error::{FinbeeError, FinbeeResult};
use crate::models::{Expense, Income, LedgerEntry, Money, UserId};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export of one user's records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub user_id: UserId,

    /// Incomes in store order
    pub incomes: Vec<Income>,

    /// Expenses in store order
    pub expenses: Vec<Expense>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub income_count: usize,
    pub expense_count: usize,
    pub total_income: Money,
    pub total_expenses: Money,

    /// Date of the oldest record of either kind
    pub earliest_record: Option<NaiveDate>,

    /// Date of the newest record of either kind
    pub latest_record: Option<NaiveDate>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage, user: &UserId) -> FinbeeResult<Self> {
        let incomes = storage.incomes.for_user(user)?;
        let expenses = storage.expenses.for_user(user)?;

        let dates = || {
            incomes
                .iter()
                .map(LedgerEntry::date)
                .chain(expenses.iter().map(LedgerEntry::date))
        };

        let metadata = ExportMetadata {
            income_count: incomes.len(),
            expense_count: expenses.len(),
            total_income: analytics::total(&incomes),
            total_expenses: analytics::total(&expenses),
            earliest_record: dates().min(),
            latest_record: dates().max(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            user_id: user.clone(),
            incomes,
            expenses,
            metadata,
        })
    }
}

/// Export a user's records to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    user: &UserId,
    writer: &mut W,
    pretty: bool,
) -> FinbeeResult<()> {
    let export = FullExport::from_storage(storage, user)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| FinbeeError::Export(e.to_string()))?;

    Ok(())
}
