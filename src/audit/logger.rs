//! Append-only audit log writer
//!
//! Each entry is one JSON object per line (JSONL), flushed as soon as it is
//! written.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{FinbeeError, FinbeeResult};

use super::entry::AuditEntry;

pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry as a single line and flush it
    pub fn log(&self, entry: &AuditEntry) -> FinbeeResult<()> {
        let line = serde_json::to_string(entry)
            .map_err(|e| FinbeeError::Json(format!("Unserializable audit entry: {}", e)))?;

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .and_then(|mut file| {
                writeln!(file, "{}", line)?;
                file.flush()
            })
            .map_err(|e| {
                FinbeeError::Io(format!("Cannot append to {}: {}", self.log_path.display(), e))
            })
    }

    /// Every entry, oldest first; blank lines are skipped
    pub fn read_all(&self) -> FinbeeResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path).map_err(|e| {
            FinbeeError::Io(format!("Cannot open {}: {}", self.log_path.display(), e))
        })?;

        BufReader::new(file)
            .lines()
            .enumerate()
            .filter(|(_, line)| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
            .map(|(index, line)| {
                let line = line.map_err(|e| {
                    FinbeeError::Io(format!("Audit log line {} unreadable: {}", index + 1, e))
                })?;
                serde_json::from_str(&line).map_err(|e| {
                    FinbeeError::Json(format!("Audit log line {} is corrupt: {}", index + 1, e))
                })
            })
            .collect()
    }

    /// The most recent `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> FinbeeResult<Vec<AuditEntry>> {
        self.read_recent_where(count, |_| true)
    }

    /// The most recent `count` entries accepted by `keep`, oldest first
    pub fn read_recent_where<F>(&self, count: usize, keep: F) -> FinbeeResult<Vec<AuditEntry>>
    where
        F: Fn(&AuditEntry) -> bool,
    {
        let mut entries: Vec<AuditEntry> =
            self.read_all()?.into_iter().filter(|e| keep(e)).collect();
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}
