//! Tax CLI command
//!
//! Estimates income tax either for an explicit annual income or for the
//! income the active user recorded in a calendar year.

use chrono::Datelike;
use clap::Args;

use crate::analytics::TaxResult;
use crate::config::settings::Settings;
use crate::error::FinbeeResult;
use crate::models::UserId;
use crate::reports::format_tax;
use crate::services::DashboardService;
use crate::storage::Storage;

use super::parse_amount;

#[derive(Args, Debug)]
pub struct TaxArgs {
    /// Annual income to tax; omit to use the income recorded in --year
    pub income: Option<String>,

    /// Calendar year of recorded income (defaults to the current year)
    #[arg(short, long, conflicts_with = "income")]
    pub year: Option<i32>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handle the tax command
pub fn handle_tax_command(
    storage: &Storage,
    settings: &Settings,
    user: &UserId,
    args: TaxArgs,
) -> FinbeeResult<()> {
    let result = match &args.income {
        Some(income) => {
            let income = parse_amount(income)?;
            TaxResult::for_income(income.to_f64())
        }
        None => {
            let service = DashboardService::new(storage, user);
            let year = args.year.unwrap_or_else(|| service.today().year());
            println!("Income recorded by {} in {}", user, year);
            service.tax_for_year(year)?
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_tax(&result, &settings.currency_symbol));
    }

    Ok(())
}
