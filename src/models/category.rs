//! Expense categories and income sources
//!
//! Both are closed sets; records carrying any other label are rejected when
//! they are parsed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spending category of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Housing,
    Food,
    Transportation,
    Entertainment,
    Utilities,
    Healthcare,
    Shopping,
    Education,
    Travel,
    Other,
}

impl ExpenseCategory {
    /// All categories in their canonical order
    pub const ALL: [ExpenseCategory; 10] = [
        Self::Housing,
        Self::Food,
        Self::Transportation,
        Self::Entertainment,
        Self::Utilities,
        Self::Healthcare,
        Self::Shopping,
        Self::Education,
        Self::Travel,
        Self::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Healthcare => "Healthcare",
            Self::Shopping => "Shopping",
            Self::Education => "Education",
            Self::Travel => "Travel",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ExpenseCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCategoryError::UnknownCategory(s.to_string()))
    }
}

/// Where an income came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IncomeSource {
    Salary,
    Freelance,
    Investments,
    Rental,
    Gift,
    Other,
}

impl IncomeSource {
    pub const ALL: [IncomeSource; 6] = [
        Self::Salary,
        Self::Freelance,
        Self::Investments,
        Self::Rental,
        Self::Gift,
        Self::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Investments => "Investments",
            Self::Rental => "Rental",
            Self::Gift => "Gift",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for IncomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for IncomeSource {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCategoryError::UnknownSource(s.to_string()))
    }
}

/// Error for labels outside the fixed category/source sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCategoryError {
    UnknownCategory(String),
    UnknownSource(String),
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCategory(s) => {
                let names: Vec<_> = ExpenseCategory::ALL.iter().map(|c| c.name()).collect();
                write!(
                    f,
                    "Unknown expense category '{}'. Expected one of: {}",
                    s,
                    names.join(", ")
                )
            }
            Self::UnknownSource(s) => {
                let names: Vec<_> = IncomeSource::ALL.iter().map(|c| c.name()).collect();
                write!(
                    f,
                    "Unknown income source '{}'. Expected one of: {}",
                    s,
                    names.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for ParseCategoryError {}
