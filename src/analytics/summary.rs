//! Compact financial summary consumed by the chat assistant

use chrono::Datelike;
use serde::Serialize;

use super::aggregate::total;
use super::breakdown::{all_time_by_category, top_category};
use super::{round_to_tenth, tax};
use crate::models::{Expense, ExpenseCategory, Income, Money};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
    pub top_expense_category: Option<ExpenseCategory>,
    /// Tax owed on the income recorded in `tax_year`
    pub tax_amount: f64,
    pub tax_year: i32,
    /// Balance as a percent of income, one decimal; 0 without income
    pub savings_rate: f64,
}

impl FinancialSummary {
    /// Summarise a user's full history, taxing the income of `tax_year`
    pub fn from_records(incomes: &[Income], expenses: &[Expense], tax_year: i32) -> Self {
        let total_income = total(incomes);
        let total_expenses = total(expenses);
        let balance = total_income - total_expenses;

        let year_income: Money = incomes
            .iter()
            .filter(|i| i.date.year() == tax_year)
            .map(|i| i.amount)
            .sum();

        let categories = all_time_by_category(expenses);
        let savings_rate = if total_income.is_positive() {
            round_to_tenth(balance.to_f64() / total_income.to_f64() * 100.0)
        } else {
            0.0
        };

        Self {
            total_income,
            total_expenses,
            balance,
            top_expense_category: top_category(&categories).map(|c| c.name),
            tax_amount: tax::tax_for_money(year_income),
            tax_year,
            savings_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IncomeSource, UserId};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_summary() {
        let user = UserId::default();
        let incomes = vec![
            Income::new(user.clone(), Money::from_major(700_000), date(2025, 4, 1), IncomeSource::Salary),
            Income::new(user.clone(), Money::from_major(50_000), date(2024, 4, 1), IncomeSource::Gift),
        ];
        let expenses = vec![
            Expense::new(user.clone(), Money::from_major(100_000), date(2025, 5, 1), ExpenseCategory::Housing),
            Expense::new(user.clone(), Money::from_major(20_000), date(2025, 5, 2), ExpenseCategory::Food),
            Expense::new(user, Money::from_major(30_000), date(2024, 5, 2), ExpenseCategory::Food),
        ];

        let summary = FinancialSummary::from_records(&incomes, &expenses, 2025);

        assert_eq!(summary.total_income, Money::from_major(750_000));
        assert_eq!(summary.total_expenses, Money::from_major(150_000));
        assert_eq!(summary.balance, Money::from_major(600_000));
        assert_eq!(summary.top_expense_category, Some(ExpenseCategory::Housing));
        assert!((summary.tax_amount - 25_000.0).abs() < 1e-6);
        assert_eq!(summary.savings_rate, 80.0);
    }

    #[test]
    fn test_summary_without_records() {
        let summary = FinancialSummary::from_records(&[], &[], 2025);
        assert_eq!(summary.balance, Money::zero());
        assert_eq!(summary.top_expense_category, None);
        assert_eq!(summary.tax_amount, 0.0);
        assert_eq!(summary.savings_rate, 0.0);
    }

    #[test]
    fn test_savings_rate_negative_when_overspending() {
        let user = UserId::default();
        let incomes = vec![Income::new(user.clone(), Money::from_major(300), date(2025, 1, 1), IncomeSource::Freelance)];
        let expenses = vec![Expense::new(user, Money::from_major(400), date(2025, 1, 2), ExpenseCategory::Shopping)];

        let summary = FinancialSummary::from_records(&incomes, &expenses, 2025);
        assert_eq!(summary.savings_rate, -33.3);
    }
}
