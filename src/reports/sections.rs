//! Terminal sections shared by the dashboard and the single-view reports

use crate::analytics::{Anomaly, CategoryTotal, FinancialSummary, MonthStats, TaxResult};
use crate::display::report::{
    format_bar, format_change, format_currency, format_currency_f64, format_percentage, separator,
};
use crate::models::MonthPeriod;
use crate::services::YearOverview;

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const WIDTH: usize = 64;
const BAR_WIDTH: usize = 20;

/// Income, expenses and net for each month of the year
pub fn format_year_overview(overview: &YearOverview, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Monthly Overview {}\n", overview.year));
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<6} {:>16} {:>16} {:>16}\n",
        "Month", "Income", "Expenses", "Net"
    ));

    let net = overview.net_by_month();
    for (month, name) in MONTH_NAMES.iter().enumerate() {
        output.push_str(&format!(
            "{:<6} {:>16} {:>16} {:>16}\n",
            name,
            format_currency(overview.incomes[month], symbol),
            format_currency(overview.expenses[month], symbol),
            format_currency(net[month], symbol)
        ));
    }

    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<6} {:>16} {:>16} {:>16}\n",
        "Total",
        format_currency(overview.total_income(), symbol),
        format_currency(overview.total_expenses(), symbol),
        format_currency(overview.total_income() - overview.total_expenses(), symbol)
    ));
    output
}

/// Current month against the previous one
pub fn format_month_stats(stats: &MonthStats, period: &MonthPeriod, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "This Month ({}) vs Last Month ({})\n",
        period,
        period.prev()
    ));
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<10} {:>16} {:>10}\n",
        "Income",
        format_currency(stats.current_income, symbol),
        format_change(stats.income_change)
    ));
    output.push_str(&format!(
        "{:<10} {:>16} {:>10}\n",
        "Expenses",
        format_currency(stats.current_expense, symbol),
        format_change(stats.expense_change)
    ));
    output.push_str(&format!(
        "{:<10} {:>16}\n",
        "Net",
        format_currency(stats.current_net(), symbol)
    ));
    output
}

/// Spending per category with proportional bars
pub fn format_category_breakdown(totals: &[CategoryTotal], symbol: &str) -> String {
    let mut output = String::from("Spending by Category\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');

    if totals.is_empty() {
        output.push_str("No expenses this month.\n");
        return output;
    }

    let max = totals
        .iter()
        .map(|t| t.value.to_f64())
        .fold(0.0_f64, f64::max);

    for total in totals {
        output.push_str(&format!(
            "{:<16} {:>14}  {}\n",
            total.name,
            format_currency(total.value, symbol),
            format_bar(total.value.to_f64(), max, BAR_WIDTH)
        ));
    }
    output
}

/// Anomaly alerts, one per line
pub fn format_anomalies(anomalies: &[Anomaly], symbol: &str) -> String {
    let mut output = String::from("Spending Alerts\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');

    if anomalies.is_empty() {
        output.push_str("No unusual spending detected.\n");
        return output;
    }

    for anomaly in anomalies {
        output.push_str(&format!(
            "! {} on {}: {} is {}% above the average of {}{} ({})\n",
            anomaly.description,
            anomaly.date.format("%Y-%m-%d"),
            format_currency(anomaly.amount, symbol),
            anomaly.percentage_increase,
            symbol,
            anomaly.average_amount,
            anomaly.id
        ));
    }
    output
}

pub fn format_tax(result: &TaxResult, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Annual income:  {}\n",
        format_currency_f64(result.annual_income, symbol)
    ));
    output.push_str(&format!(
        "Tax payable:    {}\n",
        format_currency_f64(result.tax, symbol)
    ));
    output.push_str(&format!("Slab:           {}\n", result.slab.label));
    output.push_str(&format!(
        "Effective rate: {}\n",
        format_percentage(result.effective_rate())
    ));
    output
}

pub fn format_summary(summary: &FinancialSummary, symbol: &str) -> String {
    let mut output = String::from("Financial Summary\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Total income:     {}\n",
        format_currency(summary.total_income, symbol)
    ));
    output.push_str(&format!(
        "Total expenses:   {}\n",
        format_currency(summary.total_expenses, symbol)
    ));
    output.push_str(&format!(
        "Balance:          {}\n",
        format_currency(summary.balance, symbol)
    ));
    output.push_str(&format!(
        "Top category:     {}\n",
        summary
            .top_expense_category
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string())
    ));
    output.push_str(&format!(
        "Tax ({}):       {}\n",
        summary.tax_year,
        format_currency_f64(summary.tax_amount, symbol)
    ));
    output.push_str(&format!("Savings rate:     {:.1}%\n", summary.savings_rate));
    output
}
