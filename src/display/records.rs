//! Income and expense display formatting
//!
//! Listings are rendered as tables; single records as aligned key/value
//! blocks.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Expense, Income};

use super::report::{format_currency, truncate};

const DESCRIPTION_WIDTH: usize = 32;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

fn render(rows: Vec<RecordRow>, empty: &str) -> String {
    if rows.is_empty() {
        return format!("{}\n", empty);
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));
    format!("{}\n", table)
}

/// Table of incomes in the given order
pub fn format_income_table(incomes: &[Income], symbol: &str) -> String {
    let rows = incomes
        .iter()
        .map(|income| RecordRow {
            id: income.id.to_string(),
            date: income.date.format("%Y-%m-%d").to_string(),
            kind: income.source.to_string(),
            amount: format_currency(income.amount, symbol),
            description: truncate(&income.description, DESCRIPTION_WIDTH),
        })
        .collect();
    render(rows, "No incomes found.")
}

/// Table of expenses in the given order
pub fn format_expense_table(expenses: &[Expense], symbol: &str) -> String {
    let rows = expenses
        .iter()
        .map(|expense| RecordRow {
            id: expense.id.to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            kind: expense.category.to_string(),
            amount: format_currency(expense.amount, symbol),
            description: truncate(&expense.description, DESCRIPTION_WIDTH),
        })
        .collect();
    render(rows, "No expenses found.")
}

pub fn format_income_details(income: &Income, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Income:      {}\n", income.id));
    output.push_str(&format!("Full ID:     {}\n", income.id.uuid()));
    output.push_str(&format!("Date:        {}\n", income.date.format("%Y-%m-%d")));
    output.push_str(&format!(
        "Amount:      {} ({})\n",
        format_currency(income.amount, symbol),
        income.amount
    ));
    output.push_str(&format!("Source:      {}\n", income.source));
    if !income.description.is_empty() {
        output.push_str(&format!("Description: {}\n", income.description));
    }
    output.push_str(&format!(
        "Recorded:    {}\n",
        income.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output
}

pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Full ID:     {}\n", expense.id.uuid()));
    output.push_str(&format!("Date:        {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!(
        "Amount:      {} ({})\n",
        format_currency(expense.amount, symbol),
        expense.amount
    ));
    output.push_str(&format!("Category:    {}\n", expense.category));
    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }
    output.push_str(&format!(
        "Recorded:    {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output
}
