//! Income and expense records
//!
//! Both record kinds share the same shape (owner, amount, date, description)
//! and differ only in their classification: expenses carry a category,
//! incomes a source. The shared accessors live on the [`LedgerEntry`] trait
//! so aggregation is written once for both kinds.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{ExpenseCategory, IncomeSource};
use super::ids::{ExpenseId, IncomeId, UserId};
use super::money::Money;

/// Read access shared by every record kind
pub trait LedgerEntry {
    /// Stable identifier rendered for display and audit logs
    fn entry_id(&self) -> String;
    fn user_id(&self) -> &UserId;
    fn amount(&self) -> Money;
    fn date(&self) -> NaiveDate;
    fn description(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;

    /// Validate the record before it is persisted
    fn validate(&self) -> Result<(), RecordValidationError> {
        if self.amount().is_negative() {
            return Err(RecordValidationError::NegativeAmount(self.amount()));
        }
        Ok(())
    }
}

/// Money received by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: IncomeId,
    pub user_id: UserId,
    pub amount: Money,
    pub date: NaiveDate,
    pub source: IncomeSource,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Income {
    pub fn new(user_id: UserId, amount: Money, date: NaiveDate, source: IncomeSource) -> Self {
        let now = Utc::now();
        Self {
            id: IncomeId::new(),
            user_id,
            amount,
            date,
            source,
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder-style description setter
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into().trim().to_string();
        self
    }

    /// Mark the record as modified now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Money spent by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub user_id: UserId,
    pub amount: Money,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(user_id: UserId, amount: Money, date: NaiveDate, category: ExpenseCategory) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            user_id,
            amount,
            date,
            category,
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into().trim().to_string();
        self
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl LedgerEntry for Income {
    fn entry_id(&self) -> String {
        self.id.to_string()
    }

    fn user_id(&self) -> &UserId {
        &self.user_id
    }

    fn amount(&self) -> Money {
        self.amount
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl LedgerEntry for Expense {
    fn entry_id(&self) -> String {
        self.id.to_string()
    }

    fn user_id(&self) -> &UserId {
        &self.user_id
    }

    fn amount(&self) -> Money {
        self.amount
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for Income {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.source,
            self.amount
        )
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

/// Either kind of record, tagged for serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Income(Income),
    Expense(Expense),
}

impl Record {
    /// Human-readable kind label
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Income(_) => "income",
            Self::Expense(_) => "expense",
        }
    }

    /// Category for expenses, source for incomes
    pub fn classification(&self) -> &'static str {
        match self {
            Self::Income(income) => income.source.name(),
            Self::Expense(expense) => expense.category.name(),
        }
    }

    fn entry(&self) -> &dyn LedgerEntry {
        match self {
            Self::Income(income) => income,
            Self::Expense(expense) => expense,
        }
    }
}

impl LedgerEntry for Record {
    fn entry_id(&self) -> String {
        self.entry().entry_id()
    }

    fn user_id(&self) -> &UserId {
        match self {
            Self::Income(income) => &income.user_id,
            Self::Expense(expense) => &expense.user_id,
        }
    }

    fn amount(&self) -> Money {
        self.entry().amount()
    }

    fn date(&self) -> NaiveDate {
        self.entry().date()
    }

    fn description(&self) -> &str {
        match self {
            Self::Income(income) => &income.description,
            Self::Expense(expense) => &expense.description,
        }
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.entry().created_at()
    }
}

/// Validation errors for records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    NegativeAmount(Money),
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative (got {})", amount)
            }
        }
    }
}

impl std::error::Error for RecordValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(
            UserId::default(),
            Money::from_major(250),
            date(2025, 3, 4),
            ExpenseCategory::Food,
        )
        .with_description("  Lunch  ");

        assert_eq!(expense.amount.minor(), 25_000);
        assert_eq!(expense.description, "Lunch");
        assert_eq!(expense.created_at, expense.updated_at);
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let income = Income::new(
            UserId::default(),
            Money::from_minor(-1),
            date(2025, 1, 1),
            IncomeSource::Gift,
        );
        assert_eq!(
            income.validate(),
            Err(RecordValidationError::NegativeAmount(Money::from_minor(-1)))
        );
    }

    #[test]
    fn test_zero_amount_allowed() {
        let expense = Expense::new(
            UserId::default(),
            Money::zero(),
            date(2025, 1, 1),
            ExpenseCategory::Other,
        );
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_record_tagged_serialization() {
        let expense = Expense::new(
            UserId::default(),
            Money::from_major(10),
            date(2025, 1, 15),
            ExpenseCategory::Travel,
        );
        let record = Record::Expense(expense.clone());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "expense");
        assert_eq!(json["category"], "Travel");

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
        assert_eq!(back.classification(), "Travel");
        assert_eq!(back.entry_id(), expense.id.to_string());
    }

    #[test]
    fn test_display() {
        let income = Income::new(
            UserId::default(),
            Money::from_minor(5000),
            date(2025, 1, 15),
            IncomeSource::Salary,
        );
        assert_eq!(income.to_string(), "2025-01-15 Salary 50.00");
    }
}
