//! Dashboard service
//!
//! Fetches one user's records from a [`RecordSource`], picks the calendar
//! windows relative to "today" and hands the records to the analytics
//! functions. "Today" defaults to the local date and can be pinned for
//! reproducible reports.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::analytics::{
    self, Anomaly, CategoryTotal, FinancialSummary, MonthStats, MonthlyBuckets, TaxResult,
};
use crate::error::FinbeeResult;
use crate::models::{year_bounds, Expense, Income, LedgerEntry, Money, MonthPeriod, UserId};
use crate::storage::RecordSource;

/// Income and expense buckets for one calendar year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearOverview {
    pub year: i32,
    pub incomes: MonthlyBuckets,
    pub expenses: MonthlyBuckets,
}

impl YearOverview {
    pub fn total_income(&self) -> Money {
        self.incomes.iter().sum()
    }

    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().sum()
    }

    /// Income minus expenses for each month
    pub fn net_by_month(&self) -> [Money; 12] {
        let mut net = [Money::zero(); 12];
        for (month, slot) in net.iter_mut().enumerate() {
            *slot = self.incomes[month] - self.expenses[month];
        }
        net
    }
}

/// All-time totals behind the balance figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalanceSheet {
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
}

pub struct DashboardService<'a, S: RecordSource + ?Sized> {
    source: &'a S,
    user: &'a UserId,
    today: NaiveDate,
}

impl<'a, S: RecordSource + ?Sized> DashboardService<'a, S> {
    pub fn new(source: &'a S, user: &'a UserId) -> Self {
        Self {
            source,
            user,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Pin the date the current and previous months are derived from
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn current_period(&self) -> MonthPeriod {
        MonthPeriod::containing(self.today)
    }

    /// Monthly income and expense buckets for `year`
    pub fn year_overview(&self, year: i32) -> FinbeeResult<YearOverview> {
        let (start, end) = year_bounds(year);
        let incomes = self.source.incomes_in_range(self.user, start, end)?;
        let expenses = self.source.expenses_in_range(self.user, start, end)?;

        Ok(YearOverview {
            year,
            incomes: analytics::monthly_sums(&incomes, year),
            expenses: analytics::monthly_sums(&expenses, year),
        })
    }

    /// This month's totals against last month's
    pub fn month_stats(&self) -> FinbeeResult<MonthStats> {
        let current = self.current_period();
        let previous = current.prev();

        let current_incomes = self.incomes_in(&current)?;
        let current_expenses = self.expenses_in(&current)?;
        let previous_incomes = self.incomes_in(&previous)?;
        let previous_expenses = self.expenses_in(&previous)?;

        Ok(analytics::current_month_stats(
            &current_incomes,
            &current_expenses,
            &previous_incomes,
            &previous_expenses,
        ))
    }

    /// This month's spending per category
    pub fn category_breakdown(&self) -> FinbeeResult<Vec<CategoryTotal>> {
        self.category_breakdown_for(&self.current_period())
    }

    pub fn category_breakdown_for(
        &self,
        period: &MonthPeriod,
    ) -> FinbeeResult<Vec<CategoryTotal>> {
        let expenses = self.expenses_in(period)?;
        Ok(analytics::expenses_by_category(&expenses, period))
    }

    /// Unusual expenses across the user's full history
    pub fn anomalies(&self) -> FinbeeResult<Vec<Anomaly>> {
        let expenses = self.source.expenses_for_user(self.user)?;
        Ok(analytics::detect_anomalies(&expenses))
    }

    /// All-time income minus expenses
    pub fn total_balance(&self) -> FinbeeResult<Money> {
        Ok(self.balance_sheet()?.balance)
    }

    pub fn balance_sheet(&self) -> FinbeeResult<BalanceSheet> {
        let incomes = self.source.incomes_for_user(self.user)?;
        let expenses = self.source.expenses_for_user(self.user)?;
        Ok(BalanceSheet {
            total_income: analytics::total(&incomes),
            total_expenses: analytics::total(&expenses),
            balance: analytics::total_balance(&incomes, &expenses),
        })
    }

    /// Tax owed on the income recorded in `year`
    pub fn tax_for_year(&self, year: i32) -> FinbeeResult<TaxResult> {
        let (start, end) = year_bounds(year);
        let income: Money = self
            .source
            .incomes_in_range(self.user, start, end)?
            .iter()
            .map(LedgerEntry::amount)
            .sum();
        Ok(TaxResult::for_income(income.to_f64()))
    }

    /// Summary for the chat assistant, taxing the current year's income
    pub fn summary(&self) -> FinbeeResult<FinancialSummary> {
        let incomes = self.source.incomes_for_user(self.user)?;
        let expenses = self.source.expenses_for_user(self.user)?;
        Ok(FinancialSummary::from_records(
            &incomes,
            &expenses,
            self.today.year(),
        ))
    }

    fn incomes_in(&self, period: &MonthPeriod) -> FinbeeResult<Vec<Income>> {
        self.source
            .incomes_in_range(self.user, period.start_date(), period.end_date())
    }

    fn expenses_in(&self, period: &MonthPeriod) -> FinbeeResult<Vec<Expense>> {
        self.source
            .expenses_in_range(self.user, period.start_date(), period.end_date())
    }
}
