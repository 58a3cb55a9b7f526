//! Income and expense repositories
//!
//! Both record kinds persist the same way, so a single generic repository
//! serves them. Records are kept in insertion order; that order is the "store
//! order" the anomaly scan relies on.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::FinbeeError;
use crate::models::{Expense, ExpenseId, Income, IncomeId, LedgerEntry, UserId};

use super::file_io::{read_json, write_json_atomic};

/// A record kind that can live in a [`RecordRepository`]
pub trait StoredRecord: LedgerEntry + Clone + Serialize + DeserializeOwned {
    type Id: Copy + Eq + std::fmt::Display;

    /// Entity name used in error messages
    const ENTITY: &'static str;

    fn id(&self) -> Self::Id;

    /// Whether a full or short id string refers to this record
    fn matches_id(&self, query: &str) -> bool;
}

impl StoredRecord for Income {
    type Id = IncomeId;
    const ENTITY: &'static str = "Income";

    fn id(&self) -> IncomeId {
        self.id
    }

    fn matches_id(&self, query: &str) -> bool {
        self.id.matches(query)
    }
}

impl StoredRecord for Expense {
    type Id = ExpenseId;
    const ENTITY: &'static str = "Expense";

    fn id(&self) -> ExpenseId {
        self.id
    }

    fn matches_id(&self, query: &str) -> bool {
        self.id.matches(query)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecordFile<T> {
    records: Vec<T>,
}

impl<T> Default for RecordFile<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

/// JSON-file repository for one record kind
pub struct RecordRepository<T: StoredRecord> {
    path: PathBuf,
    data: RwLock<Vec<T>>,
}

pub type IncomeRepository = RecordRepository<Income>;
pub type ExpenseRepository = RecordRepository<Expense>;

impl<T: StoredRecord> RecordRepository<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<T>>, FinbeeError> {
        self.data
            .read()
            .map_err(|e| FinbeeError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<T>>, FinbeeError> {
        self.data
            .write()
            .map_err(|e| FinbeeError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load records from disk, replacing whatever is in memory
    pub fn load(&self) -> Result<(), FinbeeError> {
        let file_data: RecordFile<T> = read_json(&self.path)?;
        *self.write()? = file_data.records;
        Ok(())
    }

    /// Save records to disk in insertion order
    pub fn save(&self) -> Result<(), FinbeeError> {
        let records = self.read()?.clone();
        write_json_atomic(&self.path, &RecordFile { records })
    }

    pub fn get(&self, id: T::Id) -> Result<Option<T>, FinbeeError> {
        Ok(self.read()?.iter().find(|r| r.id() == id).cloned())
    }

    /// Find a user's record by full or short id
    ///
    /// A short id shared by several records is reported as ambiguous.
    pub fn find(&self, user: &UserId, query: &str) -> Result<Option<T>, FinbeeError> {
        let data = self.read()?;
        let mut matches = data
            .iter()
            .filter(|r| r.user_id() == user && r.matches_id(query));

        let first = matches.next().cloned();
        if matches.next().is_some() {
            return Err(FinbeeError::Validation(format!(
                "{} id '{}' is ambiguous, use the full id",
                T::ENTITY,
                query
            )));
        }
        Ok(first)
    }

    /// All of a user's records in store order
    pub fn for_user(&self, user: &UserId) -> Result<Vec<T>, FinbeeError> {
        Ok(self
            .read()?
            .iter()
            .filter(|r| r.user_id() == user)
            .cloned()
            .collect())
    }

    /// A user's records dated within `[start, end]`, in store order
    pub fn in_range(
        &self,
        user: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<T>, FinbeeError> {
        Ok(self
            .read()?
            .iter()
            .filter(|r| r.user_id() == user && r.date() >= start && r.date() <= end)
            .cloned()
            .collect())
    }

    /// Insert a new record at the end, or replace an existing one in place
    pub fn upsert(&self, record: T) -> Result<(), FinbeeError> {
        let mut data = self.write()?;
        match data.iter_mut().find(|r| r.id() == record.id()) {
            Some(existing) => *existing = record,
            None => data.push(record),
        }
        Ok(())
    }

    /// Remove a record, returning it if it existed
    pub fn delete(&self, id: T::Id) -> Result<Option<T>, FinbeeError> {
        let mut data = self.write()?;
        Ok(data
            .iter()
            .position(|r| r.id() == id)
            .map(|index| data.remove(index)))
    }

    pub fn count(&self) -> Result<usize, FinbeeError> {
        Ok(self.read()?.len())
    }
}
