//! JSON file helpers with atomic writes
//!
//! A write goes to a sibling temp file first and is renamed over the target,
//! so a crash leaves either the old or the new file, never a torn one.

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FinbeeError;

fn storage_error(action: &str, path: &Path, err: impl Display) -> FinbeeError {
    FinbeeError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Read JSON from `path`, or `T::default()` when the file does not exist yet
pub fn read_json<T, P>(path: P) -> Result<T, FinbeeError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| storage_error("open", path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_error("parse", path, e))
}

/// Pretty-print `data` to `path` through a synced temp file and a rename
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), FinbeeError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| storage_error("create directory", dir, e))?;
    }

    // Sibling file, so the rename never crosses filesystems
    let staging = path.with_extension("json.tmp");
    let mut writer = File::create(&staging)
        .map(BufWriter::new)
        .map_err(|e| storage_error("create", &staging, e))?;

    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| storage_error("serialize", path, e))?;
    writer
        .flush()
        .and_then(|_| writer.get_ref().sync_all())
        .map_err(|e| storage_error("sync", &staging, e))?;

    fs::rename(&staging, path).map_err(|e| {
        let _ = fs::remove_file(&staging);
        storage_error("replace", path, e)
    })
}
