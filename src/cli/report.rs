//! CLI commands for reports
//!
//! Dashboard views over the active user's records. Every report can be
//! pinned to a reference date with `--as-of` and printed as JSON with
//! `--json`.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::Datelike;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::config::settings::Settings;
use crate::display::format_currency;
use crate::error::{FinbeeError, FinbeeResult};
use crate::models::{MonthPeriod, UserId};
use crate::reports::{
    format_anomalies, format_category_breakdown, format_month_stats, format_summary,
    format_year_overview, DashboardReport,
};
use crate::services::DashboardService;
use crate::storage::Storage;

use super::parse_date;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Treat this date (YYYY-MM-DD) as today when picking the current month
    #[arg(long, global = true)]
    pub as_of: Option<String>,

    /// Print the report as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: ReportCommands,
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Full dashboard: balance, monthly overview, categories, alerts and tax
    Dashboard {
        /// Calendar year for the overview and tax (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Export the monthly overview to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Income against expenses for each month of a year
    Monthly {
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Spending by category for this month or a chosen one
    Categories {
        /// Month to break down (YYYY-MM) instead of the current one
        #[arg(short, long)]
        month: Option<String>,
    },

    /// This month compared with last month
    Stats,

    /// Expenses well above their category's average
    #[command(alias = "alerts")]
    Anomalies,

    /// All-time totals, top category, tax and savings rate
    Summary,
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    user: &UserId,
    args: ReportArgs,
) -> FinbeeResult<()> {
    let mut service = DashboardService::new(storage, user);
    if let Some(as_of) = &args.as_of {
        service = service.with_today(parse_date(as_of, &settings.date_format)?);
    }
    let symbol = settings.currency_symbol.as_str();
    let current_year = service.today().year();

    match args.command {
        ReportCommands::Dashboard { year, output } => {
            let report = DashboardReport::generate(&service, user, year.unwrap_or(current_year))?;

            if let Some(path) = output {
                let file = File::create(&path).map_err(|e| {
                    FinbeeError::Export(format!(
                        "Failed to create file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                let mut writer = BufWriter::new(file);
                report.export_csv(&mut writer)?;
                println!("Dashboard exported to: {}", path.display());
            } else if args.json {
                print_json(&report)?;
            } else {
                print!("{}", report.format_terminal(symbol));
            }
        }

        ReportCommands::Monthly { year } => {
            let overview = service.year_overview(year.unwrap_or(current_year))?;
            if args.json {
                print_json(&overview)?;
            } else {
                print!("{}", format_year_overview(&overview, symbol));
            }
        }

        ReportCommands::Categories { month } => {
            let period = match month {
                Some(month) => MonthPeriod::parse(&month)
                    .map_err(|e| FinbeeError::Validation(e.to_string()))?,
                None => service.current_period(),
            };
            let totals = service.category_breakdown_for(&period)?;
            if args.json {
                print_json(&totals)?;
            } else {
                println!("{}", period);
                print!("{}", format_category_breakdown(&totals, symbol));
            }
        }

        ReportCommands::Stats => {
            let stats = service.month_stats()?;
            if args.json {
                print_json(&stats)?;
            } else {
                print!(
                    "{}",
                    format_month_stats(&stats, &service.current_period(), symbol)
                );
            }
        }

        ReportCommands::Anomalies => {
            let anomalies = service.anomalies()?;
            if args.json {
                print_json(&anomalies)?;
            } else {
                print!("{}", format_anomalies(&anomalies, symbol));
            }
        }

        ReportCommands::Summary => {
            let summary = service.summary()?;
            if args.json {
                print_json(&summary)?;
            } else {
                print!("{}", format_summary(&summary, symbol));
            }
        }
    }

    Ok(())
}

/// Print all-time income, expenses and the balance between them
pub fn handle_balance_command(
    storage: &Storage,
    settings: &Settings,
    user: &UserId,
) -> FinbeeResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let sheet = DashboardService::new(storage, user).balance_sheet()?;

    println!("Total income:   {:>14}", format_currency(sheet.total_income, symbol));
    println!("Total expenses: {:>14}", format_currency(sheet.total_expenses, symbol));
    println!("{}", "-".repeat(30));
    println!("Balance:        {:>14}", format_currency(sheet.balance, symbol));

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> FinbeeResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
