//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64, hundredths of the currency
//! unit) so sums are exact. The type is currency-agnostic; symbols and digit
//! grouping belong to the display layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as minor units (e.g. paise)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use finbee::models::Money;
    /// let amount = Money::from_minor(1050); // 10.50
    /// assert_eq!(amount.major(), 10);
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use finbee::models::Money;
    /// assert_eq!(Money::from_major(300_000).minor(), 30_000_000);
    /// ```
    pub const fn from_major(major: i64) -> Self {
        Self(major.saturating_mul(100))
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole-unit portion (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Get the fractional portion (0-99)
    pub const fn fraction(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount in whole currency units as a float, for ratio arithmetic
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "1500", "1500.5", "1,500.50", "₹1,500", "$20" and a leading
    /// minus sign. Digit-group separators are ignored wherever they appear.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, s),
        };

        let s = s.trim_start_matches(|c: char| c == '₹' || c == '$');
        let cleaned: String = s.chars().filter(|c| *c != ',' && *c != '_').collect();

        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        if cleaned.is_empty() {
            return Err(invalid());
        }

        let (whole, frac) = match cleaned.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (cleaned.as_str(), ""),
        };

        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        // Pad or truncate the fraction to 2 digits
        let fraction: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac[..2].parse().map_err(|_| invalid())?,
        };

        let minor = whole
            .checked_mul(100)
            .and_then(|m| m.checked_add(fraction))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -minor } else { minor }))
    }

    /// Format with a currency symbol and two decimals, without grouping
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.major().abs(), self.fraction())
        } else {
            format!("{}{}.{:02}", symbol, self.major(), self.fraction())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol(""))
    }
}

// Arithmetic saturates at the i64 bounds instead of wrapping or panicking
macro_rules! money_binop {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $saturating:ident) => {
        impl $op for Money {
            type Output = Self;

            fn $method(self, other: Self) -> Self {
                Self(self.0.$saturating(other.0))
            }
        }

        impl $assign for Money {
            fn $assign_method(&mut self, other: Self) {
                self.0 = self.0.$saturating(other.0);
            }
        }
    };
}

money_binop!(Add, add, AddAssign, add_assign, saturating_add);
money_binop!(Sub, sub, SubAssign, sub_assign, saturating_sub);

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Input that is not a plain decimal amount
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
}
