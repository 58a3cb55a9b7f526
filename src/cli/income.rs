//! Income CLI commands
//!
//! Implements CLI commands for recording and managing incomes.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_currency, format_income_details, format_income_table};
use crate::error::{FinbeeError, FinbeeResult};
use crate::models::{IncomeSource, UserId};
use crate::services::{CreateIncomeInput, IncomeService, RecordFilter, UpdateIncomeInput};
use crate::storage::Storage;

use super::{parse_amount, parse_date, parse_optional_date};

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record a new income
    Add {
        /// Amount (e.g., "50000" or "50000.00")
        amount: String,
        /// Source (Salary, Freelance, Investments, Rental, Gift, Other)
        #[arg(short, long)]
        source: String,
        /// Date received (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// List incomes, newest first
    List {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Number of incomes to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show income details
    Show {
        /// Income ID (full or short form)
        id: String,
    },
    /// Edit an income
    Edit {
        /// Income ID
        id: String,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        source: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// Delete an income
    Delete {
        /// Income ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_source(input: &str) -> FinbeeResult<IncomeSource> {
    input
        .parse::<IncomeSource>()
        .map_err(|e| FinbeeError::Validation(e.to_string()))
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    user: &UserId,
    cmd: IncomeCommands,
) -> FinbeeResult<()> {
    let service = IncomeService::new(storage, user);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Add {
            amount,
            source,
            date,
            description,
        } => {
            let date = match date {
                Some(date) => parse_date(&date, &settings.date_format)?,
                None => chrono::Local::now().date_naive(),
            };

            let income = service.create(CreateIncomeInput {
                amount: parse_amount(&amount)?,
                date,
                source: parse_source(&source)?,
                description,
            })?;

            println!("Recorded income:");
            println!("  ID:     {}", income.id);
            println!("  Date:   {}", income.date);
            println!("  Amount: {}", format_currency(income.amount, symbol));
            println!("  Source: {}", income.source);
        }

        IncomeCommands::List { from, to, limit } => {
            let mut filter = RecordFilter::new().limit(limit);
            if let Some(start) = parse_optional_date(from.as_deref(), &settings.date_format)? {
                filter = filter.from(start);
            }
            if let Some(end) = parse_optional_date(to.as_deref(), &settings.date_format)? {
                filter = filter.to(end);
            }

            let incomes = service.list(&filter)?;
            print!("{}", format_income_table(&incomes, symbol));
            println!("Showing {} incomes", incomes.len());
        }

        IncomeCommands::Show { id } => {
            let income = service.get(&id)?;
            print!("{}", format_income_details(&income, symbol));
        }

        IncomeCommands::Edit {
            id,
            amount,
            source,
            date,
            description,
        } => {
            let input = UpdateIncomeInput {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                date: parse_optional_date(date.as_deref(), &settings.date_format)?,
                source: source.as_deref().map(parse_source).transpose()?,
                description,
            };

            let updated = service.update(&id, input)?;
            println!("Updated income: {}", updated.id);
            println!("  Date:   {}", updated.date);
            println!("  Amount: {}", format_currency(updated.amount, symbol));
            println!("  Source: {}", updated.source);
        }

        IncomeCommands::Delete { id, force } => {
            let income = service.get(&id)?;

            if !force {
                println!("About to delete income:");
                print!("{}", format_income_details(&income, symbol));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(&id)?;
            println!("Deleted income: {} ({})", deleted.id, deleted);
        }
    }

    Ok(())
}
