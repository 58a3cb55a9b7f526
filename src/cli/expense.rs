//! Expense CLI commands
//!
//! Implements CLI commands for recording and managing expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_currency, format_expense_details, format_expense_table};
use crate::error::{FinbeeError, FinbeeResult};
use crate::models::{ExpenseCategory, UserId};
use crate::services::{CreateExpenseInput, ExpenseService, RecordFilter, UpdateExpenseInput};
use crate::storage::Storage;

use super::{parse_amount, parse_date, parse_optional_date};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "250" or "249.99")
        amount: String,
        /// Category (Housing, Food, Transportation, Entertainment, Utilities,
        /// Healthcare, Shopping, Education, Travel, Other)
        #[arg(short, long)]
        category: String,
        /// Date spent (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// List expenses, newest first
    List {
        /// Only show one category
        #[arg(short, long)]
        category: Option<String>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Number of expenses to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show expense details
    Show {
        /// Expense ID (full or short form)
        id: String,
    },
    /// Edit an expense
    Edit {
        /// Expense ID
        id: String,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_category(input: &str) -> FinbeeResult<ExpenseCategory> {
    input
        .parse::<ExpenseCategory>()
        .map_err(|e| FinbeeError::Validation(e.to_string()))
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    user: &UserId,
    cmd: ExpenseCommands,
) -> FinbeeResult<()> {
    let service = ExpenseService::new(storage, user);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let date = match date {
                Some(date) => parse_date(&date, &settings.date_format)?,
                None => chrono::Local::now().date_naive(),
            };

            let expense = service.create(CreateExpenseInput {
                amount: parse_amount(&amount)?,
                date,
                category: parse_category(&category)?,
                description,
            })?;

            println!("Recorded expense:");
            println!("  ID:       {}", expense.id);
            println!("  Date:     {}", expense.date);
            println!("  Amount:   {}", format_currency(expense.amount, symbol));
            println!("  Category: {}", expense.category);
        }

        ExpenseCommands::List {
            category,
            from,
            to,
            limit,
        } => {
            let mut filter = RecordFilter::new().limit(limit);
            if let Some(start) = parse_optional_date(from.as_deref(), &settings.date_format)? {
                filter = filter.from(start);
            }
            if let Some(end) = parse_optional_date(to.as_deref(), &settings.date_format)? {
                filter = filter.to(end);
            }

            let expenses = match category {
                Some(name) => service.list_by_category(parse_category(&name)?, &filter)?,
                None => service.list(&filter)?,
            };
            print!("{}", format_expense_table(&expenses, symbol));
            println!("Showing {} expenses", expenses.len());
        }

        ExpenseCommands::Show { id } => {
            let expense = service.get(&id)?;
            print!("{}", format_expense_details(&expense, symbol));
        }

        ExpenseCommands::Edit {
            id,
            amount,
            category,
            date,
            description,
        } => {
            let input = UpdateExpenseInput {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                date: parse_optional_date(date.as_deref(), &settings.date_format)?,
                category: category.as_deref().map(parse_category).transpose()?,
                description,
            };

            let updated = service.update(&id, input)?;
            println!("Updated expense: {}", updated.id);
            println!("  Date:     {}", updated.date);
            println!("  Amount:   {}", format_currency(updated.amount, symbol));
            println!("  Category: {}", updated.category);
        }

        ExpenseCommands::Delete { id, force } => {
            let expense = service.get(&id)?;

            if !force {
                println!("About to delete expense:");
                print!("{}", format_expense_details(&expense, symbol));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(&id)?;
            println!("Deleted expense: {} ({})", deleted.id, deleted);
        }
    }

    Ok(())
}
