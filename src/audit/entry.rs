//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::models::{Expense, Income, LedgerEntry, UserId};

use super::diff::generate_diff;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        };
        f.write_str(label)
    }
}

/// Kinds of records that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Income,
    Expense,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityType::Income => f.write_str("Income"),
            EntityType::Expense => f.write_str("Expense"),
        }
    }
}

impl FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "incomes" => Ok(EntityType::Income),
            "expense" | "expenses" => Ok(EntityType::Expense),
            other => Err(format!(
                "Unknown entity type '{}', expected income or expense",
                other
            )),
        }
    }
}

/// A ledger record that can be written to the audit log
pub trait Auditable: LedgerEntry + Serialize + fmt::Display {
    const ENTITY_TYPE: EntityType;
}

impl Auditable for Income {
    const ENTITY_TYPE: EntityType = EntityType::Income;
}

impl Auditable for Expense {
    const ENTITY_TYPE: EntityType = EntityType::Expense;
}

/// A single audit log entry
///
/// Creates carry only `after`, deletes only `before`, updates both plus a
/// one-line list of the changed fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,
    pub entity_id: String,
    /// Owner of the record
    pub user_id: UserId,

    /// Record as shown in listings, e.g. "2025-03-04 Food 250.00"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

impl AuditEntry {
    fn describe<T: Auditable>(operation: Operation, record: &T) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type: T::ENTITY_TYPE,
            entity_id: record.entry_id(),
            user_id: record.user_id().clone(),
            summary: Some(record.to_string()),
            before: None,
            after: None,
            changes: None,
        }
    }

    pub fn created<T: Auditable>(record: &T) -> Self {
        Self {
            after: serde_json::to_value(record).ok(),
            ..Self::describe(Operation::Create, record)
        }
    }

    /// Entry for an edited record, summarising the fields that changed
    pub fn updated<T: Auditable>(before: &T, after: &T) -> Self {
        let before_value = serde_json::to_value(before).ok();
        let after_value = serde_json::to_value(after).ok();
        let changes = match (&before_value, &after_value) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            before: before_value,
            after: after_value,
            changes,
            ..Self::describe(Operation::Update, after)
        }
    }

    pub fn deleted<T: Auditable>(record: &T) -> Self {
        Self {
            before: serde_json::to_value(record).ok(),
            ..Self::describe(Operation::Delete, record)
        }
    }

    /// Whether the entry belongs to `user` and, if given, touches `entity`
    pub fn matches(&self, user: &UserId, entity: Option<EntityType>) -> bool {
        &self.user_id == user && entity.map_or(true, |t| self.entity_type == t)
    }

    pub fn format_human_readable(&self) -> String {
        let mut line = format!(
            "[{}] {} {} {} by {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id,
            self.user_id
        );
        if let Some(summary) = &self.summary {
            line.push_str(&format!(": {}", summary));
        }
        if let Some(changes) = &self.changes {
            line.push_str(&format!("\n  Changes: {}", changes));
        }
        line
    }
}
