//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod expense;
pub mod export;
pub mod income;
pub mod report;
pub mod tax;

pub use audit::{handle_audit_command, AuditArgs};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use income::{handle_income_command, IncomeCommands};
pub use report::{handle_balance_command, handle_report_command, ReportArgs, ReportCommands};
pub use tax::{handle_tax_command, TaxArgs};

use chrono::NaiveDate;

use crate::error::{FinbeeError, FinbeeResult};
use crate::models::Money;

const ISO_DATE: &str = "%Y-%m-%d";

/// Parse a command-line amount such as "250" or "1499.50"
pub(crate) fn parse_amount(input: &str) -> FinbeeResult<Money> {
    Money::parse(input).map_err(|e| {
        FinbeeError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '250' or '1499.50'. Error: {}",
            input, e
        ))
    })
}

/// Parse a date in the configured format, accepting ISO dates as well
pub(crate) fn parse_date(input: &str, format: &str) -> FinbeeResult<NaiveDate> {
    NaiveDate::parse_from_str(input, format)
        .or_else(|_| NaiveDate::parse_from_str(input, ISO_DATE))
        .map_err(|_| {
            FinbeeError::Validation(format!(
                "Invalid date format: '{}'. Use YYYY-MM-DD",
                input
            ))
        })
}

pub(crate) fn parse_optional_date(
    input: Option<&str>,
    format: &str,
) -> FinbeeResult<Option<NaiveDate>> {
    input.map(|s| parse_date(s, format)).transpose()
}
