//! Core data models for FinBEE
//!
//! This module contains the data structures of the finance-tracking domain:
//! income and expense records, their classifications, money amounts and
//! calendar month windows.

pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use category::{ExpenseCategory, IncomeSource, ParseCategoryError};
pub use ids::{ExpenseId, IncomeId, UserId};
pub use money::{Money, MoneyParseError};
pub use period::{year_bounds, MonthPeriod, PeriodParseError};
pub use transaction::{Expense, Income, LedgerEntry, Record, RecordValidationError};
