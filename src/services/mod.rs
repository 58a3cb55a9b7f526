//! Service layer for FinBEE
//!
//! The service layer provides business logic on top of the storage layer:
//! validation and audit logging for record changes, and the dashboard
//! queries that feed the analytics functions.

pub mod dashboard;
pub mod expense;
pub mod filter;
pub mod income;

pub use dashboard::{BalanceSheet, DashboardService, YearOverview};
pub use expense::{CreateExpenseInput, ExpenseService, UpdateExpenseInput};
pub use filter::RecordFilter;
pub use income::{CreateIncomeInput, IncomeService, UpdateIncomeInput};
