//! CLI command for data export
//!
//! Writes the active user's records to a file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{FinbeeError, FinbeeResult};
use crate::export::{csv, json, yaml};
use crate::models::UserId;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One row per income or expense
    Csv,
    /// Full export with metadata
    Json,
    /// Full export, human-readable
    Yaml,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    user: &UserId,
    args: ExportArgs,
) -> FinbeeResult<()> {
    let file = File::create(&args.output).map_err(|e| {
        FinbeeError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => csv::export_records_csv(storage, user, &mut writer)?,
        ExportFormat::Json => json::export_full_json(storage, user, &mut writer, args.pretty)?,
        ExportFormat::Yaml => yaml::export_full_yaml(storage, user, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| FinbeeError::Export(e.to_string()))?;

    let incomes = storage.incomes.for_user(user)?.len();
    let expenses = storage.expenses.for_user(user)?.len();
    println!(
        "Exported {} incomes and {} expenses for {} to: {}",
        incomes,
        expenses,
        user,
        args.output.display()
    );

    Ok(())
}
