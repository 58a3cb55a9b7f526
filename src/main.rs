use anyhow::Result;
use clap::{Parser, Subcommand};

use finbee::cli::{
    handle_audit_command, handle_balance_command, handle_expense_command, handle_export_command,
    handle_income_command, handle_report_command, handle_tax_command, AuditArgs, ExpenseCommands,
    ExportArgs, IncomeCommands, ReportArgs, TaxArgs,
};
use finbee::config::{paths::FinbeePaths, settings::Settings};
use finbee::models::UserId;
use finbee::storage::{initialize_storage, needs_initialization, Storage};

#[derive(Parser)]
#[command(
    name = "finbee",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "FinBEE records your incomes and expenses and turns them into \
                  monthly overviews, category breakdowns, month-over-month \
                  changes, income-tax estimates and spending alerts."
)]
struct Cli {
    /// User whose records to work with (defaults to the configured user)
    #[arg(short, long, global = true, env = "FINBEE_USER")]
    user: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default settings
    Init {
        /// User to make the default
        #[arg(long)]
        default_user: Option<String>,

        /// Currency symbol used in reports
        #[arg(long)]
        currency: Option<String>,
    },

    /// Show current configuration and paths
    Config,

    /// Income management commands
    #[command(subcommand, alias = "inc")]
    Income(IncomeCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Dashboard and analytics reports
    Report(ReportArgs),

    /// Estimate income tax
    Tax(TaxArgs),

    /// All-time income minus expenses
    Balance,

    /// Export records to CSV, JSON or YAML
    Export(ExportArgs),

    /// Show recent changes from the audit log
    Audit(AuditArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinbeePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let user = settings.resolve_user(cli.user.as_deref())?;

    // Initialize storage
    let storage = Storage::open(paths.clone())?;

    match cli.command {
        Some(Commands::Init {
            default_user,
            currency,
        }) => {
            let default_user = default_user
                .as_deref()
                .map(UserId::parse)
                .transpose()?;

            println!("Initializing FinBEE at: {}", paths.base_dir().display());
            let mut settings = initialize_storage(&paths, default_user)?;
            if let Some(symbol) = currency {
                settings.currency_symbol = symbol;
                settings.save(&paths)?;
            }
            println!("Initialization complete!");
            println!("Default user: {}", settings.default_user);
            println!();
            println!("Run 'finbee income add <AMOUNT> --source Salary' to record income.");
        }
        Some(Commands::Config) => {
            println!("FinBEE Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Default user:    {}", settings.default_user);
            println!("  Active user:     {}", user);
            println!("  Setup completed: {}", settings.setup_completed);
        }
        Some(Commands::Income(cmd)) => {
            handle_income_command(&storage, &settings, &user, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, &user, cmd)?;
        }
        Some(Commands::Report(args)) => {
            handle_report_command(&storage, &settings, &user, args)?;
        }
        Some(Commands::Tax(args)) => {
            handle_tax_command(&storage, &settings, &user, args)?;
        }
        Some(Commands::Balance) => {
            handle_balance_command(&storage, &settings, &user)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, &user, args)?;
        }
        Some(Commands::Audit(args)) => {
            handle_audit_command(&storage, &user, args)?;
        }
        None => {
            println!("FinBEE - Terminal-based personal finance tracker");
            println!();
            println!("Run 'finbee --help' for usage information.");
            if needs_initialization(&paths) {
                println!("Run 'finbee init' to get started.");
            }
        }
    }

    Ok(())
}
