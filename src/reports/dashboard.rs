//! Dashboard Report
//!
//! Everything the dashboard shows for one user: the yearly overview, this
//! month against last month, current-month categories, spending alerts,
//! all-time balance and the tax estimate for the year.

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::analytics::{Anomaly, CategoryTotal, MonthStats, TaxResult};
use crate::display::report::{double_separator, format_currency};
use crate::error::{FinbeeError, FinbeeResult};
use crate::models::{Money, MonthPeriod, UserId};
use crate::services::{DashboardService, YearOverview};
use crate::storage::RecordSource;

use super::sections::{
    format_anomalies, format_category_breakdown, format_month_stats, format_tax,
    format_year_overview, MONTH_NAMES,
};

#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub user: UserId,
    /// Date the monthly windows were derived from
    pub today: NaiveDate,
    pub period: MonthPeriod,
    pub overview: YearOverview,
    pub stats: MonthStats,
    pub categories: Vec<CategoryTotal>,
    pub anomalies: Vec<Anomaly>,
    pub balance: Money,
    pub tax: TaxResult,
}

impl DashboardReport {
    /// Generate the dashboard for `year`
    pub fn generate<S: RecordSource + ?Sized>(
        service: &DashboardService<'_, S>,
        user: &UserId,
        year: i32,
    ) -> FinbeeResult<Self> {
        Ok(Self {
            user: user.clone(),
            today: service.today(),
            period: service.current_period(),
            overview: service.year_overview(year)?,
            stats: service.month_stats()?,
            categories: service.category_breakdown()?,
            anomalies: service.anomalies()?,
            balance: service.total_balance()?,
            tax: service.tax_for_year(year)?,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Dashboard for {} ({})\n",
            self.user,
            self.today.format("%Y-%m-%d")
        ));
        output.push_str(&double_separator(64));
        output.push('\n');
        output.push_str(&format!(
            "Total balance: {}\n\n",
            format_currency(self.balance, symbol)
        ));

        output.push_str(&format_month_stats(&self.stats, &self.period, symbol));
        output.push('\n');
        output.push_str(&format_year_overview(&self.overview, symbol));
        output.push('\n');
        output.push_str(&format_category_breakdown(&self.categories, symbol));
        output.push('\n');
        output.push_str(&format_anomalies(&self.anomalies, symbol));
        output.push('\n');
        output.push_str(&format!("Tax Estimate {}\n", self.overview.year));
        output.push_str(&format_tax(&self.tax, symbol));

        output
    }

    /// Export the monthly overview to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinbeeResult<()> {
        writeln!(writer, "Year,Month,Income,Expenses,Net")
            .map_err(|e| FinbeeError::Export(e.to_string()))?;

        let net = self.overview.net_by_month();
        for (month, name) in MONTH_NAMES.iter().enumerate() {
            writeln!(
                writer,
                "{},{},{},{},{}",
                self.overview.year,
                name,
                self.overview.incomes[month],
                self.overview.expenses[month],
                net[month]
            )
            .map_err(|e| FinbeeError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "{},TOTAL,{},{},{}",
            self.overview.year,
            self.overview.total_income(),
            self.overview.total_expenses(),
            self.overview.total_income() - self.overview.total_expenses()
        )
        .map_err(|e| FinbeeError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseCategory, Income, IncomeSource};
    use crate::storage::MemorySource;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> (MemorySource, UserId) {
        let user = UserId::parse("ravi").unwrap();
        let mut source = MemorySource::default();
        source.push_income(Income::new(
            user.clone(),
            Money::from_major(800_000),
            date(2025, 4, 1),
            IncomeSource::Salary,
        ));
        for amount in [100, 100, 100, 300] {
            source.push_expense(Expense::new(
                user.clone(),
                Money::from_major(amount),
                date(2025, 4, 10),
                ExpenseCategory::Food,
            ));
        }
        (source, user)
    }

    #[test]
    fn test_generate_dashboard() {
        let (source, user) = sample();
        let service = DashboardService::new(&source, &user).with_today(date(2025, 4, 20));
        let report = DashboardReport::generate(&service, &user, 2025).unwrap();

        assert_eq!(report.period, MonthPeriod::new(2025, 4).unwrap());
        assert_eq!(report.overview.incomes[3], Money::from_major(800_000));
        assert_eq!(report.stats.current_expense, Money::from_major(600));
        assert_eq!(report.categories.len(), 1);
        assert_eq!(report.anomalies.len(), 1);
        assert_eq!(report.balance, Money::from_major(799_400));
        assert_eq!(report.tax.tax, 35_000.0);
    }

    #[test]
    fn test_format_terminal() {
        let (source, user) = sample();
        let service = DashboardService::new(&source, &user).with_today(date(2025, 4, 20));
        let report = DashboardReport::generate(&service, &user, 2025).unwrap();
        let output = report.format_terminal("₹");

        assert!(output.contains("Dashboard for ravi (2025-04-20)"));
        assert!(output.contains("Total balance: ₹7,99,400"));
        assert!(output.contains("Unusual spending in Food category"));
        assert!(output.contains("₹15,000 + 10% above ₹6,00,000"));
    }

    #[test]
    fn test_export_csv() {
        let (source, user) = sample();
        let service = DashboardService::new(&source, &user).with_today(date(2025, 4, 20));
        let report = DashboardReport::generate(&service, &user, 2025).unwrap();

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "Year,Month,Income,Expenses,Net");
        assert_eq!(lines[4], "2025,Apr,800000.00,600.00,799400.00");
        assert_eq!(lines[13], "2025,TOTAL,800000.00,600.00,799400.00");
    }
}
