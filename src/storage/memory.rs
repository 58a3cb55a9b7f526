//! In-memory record source
//!
//! Holds records in plain vectors; useful for embedding the analytics in
//! another program and for tests.

use chrono::NaiveDate;

use crate::error::FinbeeResult;
use crate::models::{Expense, Income, LedgerEntry, UserId};

use super::RecordSource;

#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    incomes: Vec<Income>,
    expenses: Vec<Expense>,
}

impl MemorySource {
    pub fn new(incomes: Vec<Income>, expenses: Vec<Expense>) -> Self {
        Self { incomes, expenses }
    }

    pub fn push_income(&mut self, income: Income) {
        self.incomes.push(income);
    }

    pub fn push_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }
}

fn select<T: LedgerEntry + Clone>(
    records: &[T],
    user: &UserId,
    range: Option<(NaiveDate, NaiveDate)>,
) -> Vec<T> {
    records
        .iter()
        .filter(|r| r.user_id() == user)
        .filter(|r| range.map_or(true, |(start, end)| r.date() >= start && r.date() <= end))
        .cloned()
        .collect()
}

impl RecordSource for MemorySource {
    fn incomes_for_user(&self, user: &UserId) -> FinbeeResult<Vec<Income>> {
        Ok(select(&self.incomes, user, None))
    }

    fn expenses_for_user(&self, user: &UserId) -> FinbeeResult<Vec<Expense>> {
        Ok(select(&self.expenses, user, None))
    }

    fn incomes_in_range(
        &self,
        user: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FinbeeResult<Vec<Income>> {
        Ok(select(&self.incomes, user, Some((start, end))))
    }

    fn expenses_in_range(
        &self,
        user: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FinbeeResult<Vec<Expense>> {
        Ok(select(&self.expenses, user, Some((start, end))))
    }
}
