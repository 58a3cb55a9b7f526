//! CSV Export functionality
//!
//! Writes one row per income or expense, oldest first.

use std::io::Write;

use crate::error::{FinbeeError, FinbeeResult};
use crate::models::{LedgerEntry, Record, UserId};
use crate::storage::Storage;

const HEADER: [&str; 6] = ["Kind", "ID", "Date", "Classification", "Amount", "Description"];

/// Both record kinds for `user`, ordered by date (store order within a day)
pub fn collect_records(storage: &Storage, user: &UserId) -> FinbeeResult<Vec<Record>> {
    let mut records: Vec<Record> = storage
        .incomes
        .for_user(user)?
        .into_iter()
        .map(Record::Income)
        .chain(
            storage
                .expenses
                .for_user(user)?
                .into_iter()
                .map(Record::Expense),
        )
        .collect();
    records.sort_by_key(|record| record.date());
    Ok(records)
}

/// Export all of a user's records to CSV
pub fn export_records_csv<W: Write>(
    storage: &Storage,
    user: &UserId,
    writer: &mut W,
) -> FinbeeResult<()> {
    let records = collect_records(storage, user)?;
    write_records_csv(&records, writer)
}

/// Write already-collected records to CSV
pub fn write_records_csv<W: Write>(records: &[Record], writer: &mut W) -> FinbeeResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| FinbeeError::Export(e.to_string()))?;

    for record in records {
        let id = full_id(record);
        let date = record.date().format("%Y-%m-%d").to_string();
        let amount = record.amount().to_string();
        csv_writer
            .write_record([
                record.kind(),
                id.as_str(),
                date.as_str(),
                record.classification(),
                amount.as_str(),
                record.description(),
            ])
            .map_err(|e| FinbeeError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinbeeError::Export(e.to_string()))?;
    Ok(())
}

fn full_id(record: &Record) -> String {
    match record {
        Record::Income(income) => income.id.uuid().to_string(),
        Record::Expense(expense) => expense.id.uuid().to_string(),
    }
}
