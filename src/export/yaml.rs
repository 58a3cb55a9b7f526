//! YAML Export functionality
//!
//! Same content as the JSON export, for human-readable backups.

use std::io::Write;

use crate::error::{FinbeeError, FinbeeResult};
use crate::export::json::FullExport;
use crate::models::UserId;
use crate::storage::Storage;

/// Export a user's records to YAML format
pub fn export_full_yaml<W: Write>(
    storage: &Storage,
    user: &UserId,
    writer: &mut W,
) -> FinbeeResult<()> {
    let export = FullExport::from_storage(storage, user)?;

    writeln!(writer, "# FinBEE export for {}", export.user_id)
        .map_err(|e| FinbeeError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| FinbeeError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| FinbeeError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinbeeError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FinbeeError::Export(e.to_string()))?;

    Ok(())
}
