//! Display formatting for terminal output
//!
//! Record tables and the currency/percentage helpers shared by reports.

pub mod records;
pub mod report;

pub use records::{
    format_expense_details, format_expense_table, format_income_details, format_income_table,
};
pub use report::{format_change, format_currency, format_currency_f64};
