//! Audit CLI command
//!
//! Prints the active user's recent entries from the audit log.

use clap::Args;

use crate::audit::EntityType;
use crate::error::FinbeeResult;
use crate::models::UserId;
use crate::storage::Storage;

#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Number of entries to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,

    /// Only show changes to incomes or expenses
    #[arg(short, long)]
    pub entity: Option<EntityType>,

    /// Include the before/after record values
    #[arg(short, long)]
    pub verbose: bool,
}

/// Handle the audit command
pub fn handle_audit_command(
    storage: &Storage,
    user: &UserId,
    args: AuditArgs,
) -> FinbeeResult<()> {
    let audit = storage.audit();
    if !audit.exists() {
        println!("No audit entries yet.");
        return Ok(());
    }

    let entries = audit.read_recent_where(args.limit, |e| e.matches(user, args.entity))?;
    if entries.is_empty() {
        println!("No matching audit entries.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
        if args.verbose {
            if let Some(before) = &entry.before {
                println!("  Before: {}", before);
            }
            if let Some(after) = &entry.after {
                println!("  After:  {}", after);
            }
        }
    }
    println!(
        "\nShowing {} most recent entries for {} ({})",
        entries.len(),
        user,
        audit.path().display()
    );

    Ok(())
}
