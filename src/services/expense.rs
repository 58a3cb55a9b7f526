//! Expense service

use chrono::NaiveDate;

use crate::error::{FinbeeError, FinbeeResult};
use crate::models::{Expense, ExpenseCategory, LedgerEntry, Money, UserId};
use crate::storage::Storage;

use super::filter::RecordFilter;

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub amount: Money,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub description: Option<String>,
}

/// Fields to change on an existing expense; `None` leaves a field as is
#[derive(Debug, Clone, Default)]
pub struct UpdateExpenseInput {
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
    pub category: Option<ExpenseCategory>,
    pub description: Option<String>,
}

pub struct ExpenseService<'a> {
    storage: &'a Storage,
    user: &'a UserId,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage, user: &'a UserId) -> Self {
        Self { storage, user }
    }

    pub fn create(&self, input: CreateExpenseInput) -> FinbeeResult<Expense> {
        let mut expense =
            Expense::new(self.user.clone(), input.amount, input.date, input.category);
        if let Some(description) = input.description {
            expense = expense.with_description(description);
        }

        expense
            .validate()
            .map_err(|e| FinbeeError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_create(&expense)?;

        Ok(expense)
    }

    pub fn find(&self, identifier: &str) -> FinbeeResult<Option<Expense>> {
        self.storage.expenses.find(self.user, identifier)
    }

    pub fn get(&self, identifier: &str) -> FinbeeResult<Expense> {
        self.find(identifier)?
            .ok_or_else(|| FinbeeError::expense_not_found(identifier))
    }

    /// The user's expenses, newest first
    pub fn list(&self, filter: &RecordFilter) -> FinbeeResult<Vec<Expense>> {
        Ok(filter.apply(self.storage.expenses.for_user(self.user)?))
    }

    /// The user's expenses in one category, newest first
    pub fn list_by_category(
        &self,
        category: ExpenseCategory,
        filter: &RecordFilter,
    ) -> FinbeeResult<Vec<Expense>> {
        let mut expenses = self.storage.expenses.for_user(self.user)?;
        expenses.retain(|e| e.category == category);
        Ok(filter.apply(expenses))
    }

    pub fn update(&self, identifier: &str, input: UpdateExpenseInput) -> FinbeeResult<Expense> {
        let mut expense = self.get(identifier)?;
        let before = expense.clone();

        if let Some(amount) = input.amount {
            expense.amount = amount;
        }
        if let Some(date) = input.date {
            expense.date = date;
        }
        if let Some(category) = input.category {
            expense.category = category;
        }
        if let Some(description) = input.description {
            expense.description = description.trim().to_string();
        }

        expense
            .validate()
            .map_err(|e| FinbeeError::Validation(e.to_string()))?;
        expense.touch();

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_update(&before, &expense)?;

        Ok(expense)
    }

    pub fn delete(&self, identifier: &str) -> FinbeeResult<Expense> {
        let expense = self.get(identifier)?;

        self.storage.expenses.delete(expense.id)?;
        self.storage.expenses.save()?;

        self.storage.log_delete(&expense)?;

        Ok(expense)
    }
}
