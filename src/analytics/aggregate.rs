//! Monthly buckets and month-over-month statistics

use chrono::Datelike;
use serde::Serialize;

use super::round_to_tenth;
use crate::models::{LedgerEntry, Money};

/// Per-month totals for one calendar year, index 0 is January
pub type MonthlyBuckets = [Money; 12];

/// Sum records of `year` into the bucket of their month
///
/// Records dated outside the year are ignored; months without records stay
/// at zero.
pub fn monthly_sums<T: LedgerEntry>(records: &[T], year: i32) -> MonthlyBuckets {
    let mut buckets = [Money::zero(); 12];
    for record in records.iter().filter(|r| r.date().year() == year) {
        buckets[record.date().month0() as usize] += record.amount();
    }
    buckets
}

/// Sum of all record amounts
pub fn total<T: LedgerEntry>(records: &[T]) -> Money {
    records.iter().map(LedgerEntry::amount).sum()
}

/// All income minus all expenses; negative when spending exceeds income
pub fn total_balance<I: LedgerEntry, E: LedgerEntry>(incomes: &[I], expenses: &[E]) -> Money {
    total(incomes) - total(expenses)
}

/// Current month totals compared against the previous month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthStats {
    pub current_income: Money,
    pub current_expense: Money,
    /// Percent change from the previous month, one decimal
    pub income_change: f64,
    /// Percent change from the previous month, one decimal
    pub expense_change: f64,
}

impl MonthStats {
    /// Income left over this month
    pub fn current_net(&self) -> Money {
        self.current_income - self.current_expense
    }
}

/// Compare this month's records with last month's
///
/// With nothing recorded last month, income counts as +100% and expense as
/// -100% regardless of this month's figures.
pub fn current_month_stats<I: LedgerEntry, E: LedgerEntry>(
    current_incomes: &[I],
    current_expenses: &[E],
    previous_incomes: &[I],
    previous_expenses: &[E],
) -> MonthStats {
    let current_income = total(current_incomes);
    let current_expense = total(current_expenses);
    let previous_income = total(previous_incomes);
    let previous_expense = total(previous_expenses);

    MonthStats {
        current_income,
        current_expense,
        income_change: percent_change(current_income, previous_income, 100.0),
        expense_change: percent_change(current_expense, previous_expense, -100.0),
    }
}

fn percent_change(current: Money, previous: Money, when_previous_zero: f64) -> f64 {
    if previous.is_zero() {
        return when_previous_zero;
    }
    let change = (current.to_f64() - previous.to_f64()) / previous.to_f64() * 100.0;
    round_to_tenth(change)
}
