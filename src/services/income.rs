//! Income service
//!
//! Create, edit, delete and list a user's incomes. Every mutation is
//! validated, persisted and written to the audit log.

use chrono::NaiveDate;

use crate::error::{FinbeeError, FinbeeResult};
use crate::models::{Income, IncomeSource, LedgerEntry, Money, UserId};
use crate::storage::Storage;

use super::filter::RecordFilter;

/// Input for recording a new income
#[derive(Debug, Clone)]
pub struct CreateIncomeInput {
    pub amount: Money,
    pub date: NaiveDate,
    pub source: IncomeSource,
    pub description: Option<String>,
}

/// Fields to change on an existing income; `None` leaves a field as is
#[derive(Debug, Clone, Default)]
pub struct UpdateIncomeInput {
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
    pub source: Option<IncomeSource>,
    pub description: Option<String>,
}

pub struct IncomeService<'a> {
    storage: &'a Storage,
    user: &'a UserId,
}

impl<'a> IncomeService<'a> {
    pub fn new(storage: &'a Storage, user: &'a UserId) -> Self {
        Self { storage, user }
    }

    pub fn create(&self, input: CreateIncomeInput) -> FinbeeResult<Income> {
        let mut income = Income::new(self.user.clone(), input.amount, input.date, input.source);
        if let Some(description) = input.description {
            income = income.with_description(description);
        }

        income
            .validate()
            .map_err(|e| FinbeeError::Validation(e.to_string()))?;

        self.storage.incomes.upsert(income.clone())?;
        self.storage.incomes.save()?;

        self.storage.log_create(&income)?;

        Ok(income)
    }

    /// Find an income by full or short id
    pub fn find(&self, identifier: &str) -> FinbeeResult<Option<Income>> {
        self.storage.incomes.find(self.user, identifier)
    }

    /// Like [`find`](Self::find), but a missing income is an error
    pub fn get(&self, identifier: &str) -> FinbeeResult<Income> {
        self.find(identifier)?
            .ok_or_else(|| FinbeeError::income_not_found(identifier))
    }

    /// The user's incomes, newest first
    pub fn list(&self, filter: &RecordFilter) -> FinbeeResult<Vec<Income>> {
        Ok(filter.apply(self.storage.incomes.for_user(self.user)?))
    }

    pub fn update(&self, identifier: &str, input: UpdateIncomeInput) -> FinbeeResult<Income> {
        let mut income = self.get(identifier)?;
        let before = income.clone();

        if let Some(amount) = input.amount {
            income.amount = amount;
        }
        if let Some(date) = input.date {
            income.date = date;
        }
        if let Some(source) = input.source {
            income.source = source;
        }
        if let Some(description) = input.description {
            income.description = description.trim().to_string();
        }

        income
            .validate()
            .map_err(|e| FinbeeError::Validation(e.to_string()))?;
        income.touch();

        self.storage.incomes.upsert(income.clone())?;
        self.storage.incomes.save()?;

        self.storage.log_update(&before, &income)?;

        Ok(income)
    }

    pub fn delete(&self, identifier: &str) -> FinbeeResult<Income> {
        let income = self.get(identifier)?;

        self.storage.incomes.delete(income.id)?;
        self.storage.incomes.save()?;

        self.storage.log_delete(&income)?;

        Ok(income)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{EntityType, Operation};
    use crate::config::paths::FinbeePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinbeePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();
        (temp_dir, storage)
    }

    fn salary(major: i64, day: u32) -> CreateIncomeInput {
        CreateIncomeInput {
            amount: Money::from_major(major),
            date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            source: IncomeSource::Salary,
            description: Some("January pay".to_string()),
        }
    }

    #[test]
    fn test_create_income() {
        let (_temp_dir, storage) = create_test_storage();
        let user = UserId::default();
        let service = IncomeService::new(&storage, &user);

        let income = service.create(salary(50_000, 31)).unwrap();

        assert_eq!(income.amount, Money::from_major(50_000));
        assert_eq!(income.description, "January pay");
        assert_eq!(service.get(&income.id.to_string()).unwrap(), income);

        let log = storage.audit().read_all().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].operation, Operation::Create);
        assert_eq!(log[0].entity_type, EntityType::Income);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let user = UserId::default();
        let service = IncomeService::new(&storage, &user);

        let mut input = salary(0, 1);
        input.amount = Money::from_minor(-500);

        let err = service.create(input).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.incomes.count().unwrap(), 0);
    }

    #[test]
    fn test_update_income() {
        let (_temp_dir, storage) = create_test_storage();
        let user = UserId::default();
        let service = IncomeService::new(&storage, &user);
        let income = service.create(salary(1000, 5)).unwrap();

        let updated = service
            .update(
                &income.id.to_string(),
                UpdateIncomeInput {
                    amount: Some(Money::from_major(1500)),
                    source: Some(IncomeSource::Freelance),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.amount, Money::from_major(1500));
        assert_eq!(updated.source, IncomeSource::Freelance);
        assert_eq!(updated.date, income.date);

        let log = storage.audit().read_recent(1).unwrap();
        let diff = log[0].changes.clone().unwrap();
        assert!(diff.contains("amount: 100000 -> 150000"));
        assert!(diff.contains("source: \"Salary\" -> \"Freelance\""));
    }

    #[test]
    fn test_update_rejects_negative_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let user = UserId::default();
        let service = IncomeService::new(&storage, &user);
        let income = service.create(salary(1000, 5)).unwrap();

        let result = service.update(
            &income.id.to_string(),
            UpdateIncomeInput {
                amount: Some(Money::from_major(-1)),
                ..Default::default()
            },
        );
        assert!(result.unwrap_err().is_validation());
        assert_eq!(service.get(&income.id.to_string()).unwrap().amount, income.amount);
    }

    #[test]
    fn test_delete_income() {
        let (_temp_dir, storage) = create_test_storage();
        let user = UserId::default();
        let service = IncomeService::new(&storage, &user);
        let income = service.create(salary(1000, 5)).unwrap();

        service.delete(&income.id.to_string()).unwrap();

        assert!(service.find(&income.id.to_string()).unwrap().is_none());
        assert!(service.delete(&income.id.to_string()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_is_per_user_and_newest_first() {
        let (_temp_dir, storage) = create_test_storage();
        let asha = UserId::parse("asha").unwrap();
        let ravi = UserId::parse("ravi").unwrap();

        let service = IncomeService::new(&storage, &asha);
        service.create(salary(100, 2)).unwrap();
        service.create(salary(200, 20)).unwrap();
        IncomeService::new(&storage, &ravi)
            .create(salary(300, 10))
            .unwrap();

        let listed = service.list(&RecordFilter::new()).unwrap();
        let amounts: Vec<Money> = listed.iter().map(|i| i.amount).collect();
        assert_eq!(amounts, vec![Money::from_major(200), Money::from_major(100)]);
    }
}
