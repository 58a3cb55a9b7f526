//! Listing filters shared by the income and expense services

use chrono::NaiveDate;

use crate::models::LedgerEntry;

/// Options for filtering record listings
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn to(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Keep matching records, newest first, then apply the limit
    pub(crate) fn apply<T: LedgerEntry>(&self, mut records: Vec<T>) -> Vec<T> {
        if let Some(start) = self.start_date {
            records.retain(|r| r.date() >= start);
        }
        if let Some(end) = self.end_date {
            records.retain(|r| r.date() <= end);
        }

        records.sort_by(|a, b| {
            b.date()
                .cmp(&a.date())
                .then(b.created_at().cmp(&a.created_at()))
        });

        if let Some(limit) = self.limit {
            records.truncate(limit);
        }
        records
    }
}
