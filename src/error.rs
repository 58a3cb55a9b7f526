//! Error type shared by every FinBEE layer
//!
//! Library code returns [`FinbeeResult`]; the binary wraps it in `anyhow` at
//! the top level.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinbeeError {
    /// Settings file or data directory could not be resolved or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected record or command-line input
    #[error("Validation error: {0}")]
    Validation(String),

    /// No income or expense of the user matches the identifier
    #[error("No {kind} matches '{identifier}'")]
    NotFound {
        kind: &'static str,
        identifier: String,
    },

    /// Repository file or lock failure
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl FinbeeError {
    pub fn income_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "income",
            identifier: identifier.into(),
        }
    }

    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "expense",
            identifier: identifier.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for FinbeeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinbeeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

pub type FinbeeResult<T> = Result<T, FinbeeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_message() {
        let err = FinbeeError::Config("missing home directory".into());
        assert_eq!(err.to_string(), "Configuration error: missing home directory");
    }

    #[test]
    fn test_not_found_names_kind_and_identifier() {
        let err = FinbeeError::expense_not_found("exp-1234abcd");
        assert_eq!(err.to_string(), "No expense matches 'exp-1234abcd'");
        assert!(err.is_not_found());
        assert!(!err.is_validation());

        let err = FinbeeError::income_not_found("inc-00000000");
        assert_eq!(err.to_string(), "No income matches 'inc-00000000'");
    }

    #[test]
    fn test_validation_error() {
        let err = FinbeeError::Validation("Amount cannot be negative".into());
        assert_eq!(
            err.to_string(),
            "Validation error: Amount cannot be negative"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_conversions() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        assert!(matches!(FinbeeError::from(io_err), FinbeeError::Io(_)));

        let json_err = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        assert!(matches!(FinbeeError::from(json_err), FinbeeError::Json(_)));
    }
}
