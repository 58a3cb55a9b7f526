//! Storage layer for FinBEE
//!
//! JSON file repositories for incomes and expenses, plus the audit log every
//! mutation is written to. The analytics layer never sees [`Storage`]
//! directly; it reads through the [`RecordSource`] trait.

pub mod file_io;
pub mod init;
pub mod memory;
pub mod records;

pub use file_io::{read_json, write_json_atomic};
pub use init::{initialize_storage, needs_initialization};
pub use memory::MemorySource;
pub use records::{ExpenseRepository, IncomeRepository, RecordRepository, StoredRecord};

use chrono::NaiveDate;

use crate::audit::{AuditEntry, AuditLogger, Auditable};
use crate::config::paths::FinbeePaths;
use crate::error::{FinbeeError, FinbeeResult};
use crate::models::{Expense, Income, UserId};

/// Read access to a user's records
///
/// Results come back in store order.
pub trait RecordSource {
    fn incomes_for_user(&self, user: &UserId) -> FinbeeResult<Vec<Income>>;

    fn expenses_for_user(&self, user: &UserId) -> FinbeeResult<Vec<Expense>>;

    /// Incomes dated within `[start, end]`, both ends inclusive
    fn incomes_in_range(
        &self,
        user: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FinbeeResult<Vec<Income>>;

    /// Expenses dated within `[start, end]`, both ends inclusive
    fn expenses_in_range(
        &self,
        user: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FinbeeResult<Vec<Expense>>;
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinbeePaths,
    pub incomes: IncomeRepository,
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a storage rooted at `paths`, creating directories as needed
    pub fn new(paths: FinbeePaths) -> Result<Self, FinbeeError> {
        paths.ensure_directories()?;

        Ok(Self {
            incomes: IncomeRepository::new(paths.incomes_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Create a storage and load everything from disk
    pub fn open(paths: FinbeePaths) -> Result<Self, FinbeeError> {
        let storage = Self::new(paths)?;
        storage.load_all()?;
        Ok(storage)
    }

    pub fn paths(&self) -> &FinbeePaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn load_all(&self) -> Result<(), FinbeeError> {
        self.incomes.load()?;
        self.expenses.load()?;
        Ok(())
    }

    pub fn save_all(&self) -> Result<(), FinbeeError> {
        self.incomes.save()?;
        self.expenses.save()?;
        Ok(())
    }

    /// Check if storage has been initialized (settings written)
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }

    /// Audit a newly created record
    pub fn log_create<T: Auditable>(&self, record: &T) -> FinbeeResult<()> {
        self.audit.log(&AuditEntry::created(record))
    }

    /// Audit an edited record along with the fields that changed
    pub fn log_update<T: Auditable>(&self, before: &T, after: &T) -> FinbeeResult<()> {
        self.audit.log(&AuditEntry::updated(before, after))
    }

    /// Audit a removed record
    pub fn log_delete<T: Auditable>(&self, record: &T) -> FinbeeResult<()> {
        self.audit.log(&AuditEntry::deleted(record))
    }
}

impl RecordSource for Storage {
    fn incomes_for_user(&self, user: &UserId) -> FinbeeResult<Vec<Income>> {
        self.incomes.for_user(user)
    }

    fn expenses_for_user(&self, user: &UserId) -> FinbeeResult<Vec<Expense>> {
        self.expenses.for_user(user)
    }

    fn incomes_in_range(
        &self,
        user: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FinbeeResult<Vec<Income>> {
        self.incomes.in_range(user, start, end)
    }

    fn expenses_in_range(
        &self,
        user: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FinbeeResult<Vec<Expense>> {
        self.expenses.in_range(user, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{ExpenseCategory, Money};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinbeePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_test_storage();
        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_save_all_and_open() {
        let (temp_dir, storage) = create_test_storage();
        let expense = Expense::new(
            UserId::default(),
            Money::from_major(120),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            ExpenseCategory::Utilities,
        );
        storage.expenses.upsert(expense.clone()).unwrap();
        storage.save_all().unwrap();

        let reopened =
            Storage::open(FinbeePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(
            reopened.expenses_for_user(&UserId::default()).unwrap(),
            vec![expense]
        );
        assert!(reopened.incomes_for_user(&UserId::default()).unwrap().is_empty());
    }

    #[test]
    fn test_log_update_records_diff() {
        let (_temp_dir, storage) = create_test_storage();
        let before = Expense::new(
            UserId::default(),
            Money::from_major(10),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            ExpenseCategory::Food,
        );
        let mut after = before.clone();
        after.amount = Money::from_major(15);
        after.touch();

        storage.log_update(&before, &after).unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Update);
        assert_eq!(entries[0].changes.as_deref(), Some("amount: 1000 -> 1500"));
    }
}
