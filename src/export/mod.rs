//! Export module for FinBEE
//!
//! Writes one user's records out in several formats:
//! - CSV: one row per income or expense (spreadsheet-compatible)
//! - JSON: machine-readable full export with metadata
//! - YAML: the same full export, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{collect_records, export_records_csv, write_records_csv};
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
