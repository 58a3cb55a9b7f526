//! Identifiers for records and their owners
//!
//! Income and expense ids are distinct UUID newtypes, so one can never be
//! passed where the other is expected. Users see the short form
//! (`inc-1a2b3c4d`) and may type either that or the full UUID.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Prefix of the short display form
            pub const PREFIX: &'static str = $prefix;

            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn uuid(&self) -> Uuid {
                self.0
            }

            /// Whether `query` is this id in full or short form, ignoring case
            pub fn matches(&self, query: &str) -> bool {
                let query = query.trim();
                query.eq_ignore_ascii_case(&self.0.to_string())
                    || query.eq_ignore_ascii_case(&self.to_string())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let simple = self.0.simple().to_string();
                write!(f, "{}{}", Self::PREFIX, &simple[..8])
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            /// Parses a full UUID, with or without the display prefix
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Uuid::parse_str(s.strip_prefix(Self::PREFIX).unwrap_or(s)).map(Self)
            }
        }
    };
}

record_id!(
    /// Identifier of an [`Income`](super::Income)
    IncomeId,
    "inc-"
);
record_id!(
    /// Identifier of an [`Expense`](super::Expense)
    ExpenseId,
    "exp-"
);

/// Identifier of the user that owns a record
///
/// Users are managed outside this application; the identifier is an opaque,
/// trimmed, non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn parse(s: &str) -> Result<Self, InvalidUserId> {
        match s.trim() {
            "" => Err(InvalidUserId),
            trimmed => Ok(Self(trimmed.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self("default".to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UserId {
    type Err = InvalidUserId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("User identifier cannot be empty")]
pub struct InvalidUserId;

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_short_display() {
        let id: ExpenseId = SAMPLE.parse().unwrap();
        assert_eq!(id.to_string(), "exp-550e8400");

        let income = IncomeId::new().to_string();
        assert!(income.starts_with("inc-"));
        assert_eq!(income.len(), 12);
    }

    #[test]
    fn test_new_ids_differ() {
        assert_ne!(ExpenseId::new(), ExpenseId::new());
    }

    #[test]
    fn test_serializes_as_plain_uuid() {
        let id: IncomeId = SAMPLE.parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", SAMPLE));
        assert_eq!(serde_json::from_str::<IncomeId>(&json).unwrap(), id);
    }

    #[test]
    fn test_parse_accepts_prefix() {
        let plain: ExpenseId = SAMPLE.parse().unwrap();
        let prefixed: ExpenseId = format!("exp-{}", SAMPLE).parse().unwrap();
        assert_eq!(plain, prefixed);
        assert_eq!(plain.uuid().to_string(), SAMPLE);
        assert!("exp-550e8400".parse::<ExpenseId>().is_err());
    }

    #[test]
    fn test_matches_short_and_full_forms() {
        let id: ExpenseId = SAMPLE.parse().unwrap();
        assert!(id.matches("exp-550e8400"));
        assert!(id.matches(" EXP-550E8400 "));
        assert!(id.matches(SAMPLE));
        assert!(!id.matches("exp-00000000"));
        assert!(!id.matches("inc-550e8400"));
    }

    #[test]
    fn test_user_id_parse() {
        assert_eq!(UserId::parse("  asha ").unwrap().as_str(), "asha");
        assert_eq!(UserId::parse(""), Err(InvalidUserId));
        assert_eq!("   ".parse::<UserId>(), Err(InvalidUserId));
        assert_eq!(UserId::default().as_str(), "default");
    }
}
