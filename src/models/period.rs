//! Calendar month windows
//!
//! The dashboard compares the calendar month containing "today" with the one
//! before it; both windows include their first and last day.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthPeriod {
    year: i32,
    month: u32,
}

impl MonthPeriod {
    /// Create a month period; `month` must be 1..=12
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(PeriodParseError::InvalidYear(year));
        }
        Ok(Self { year, month })
    }

    /// The month containing the given date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        first_of_month(self.year, self.month)
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        let next = self.next();
        // December of chrono's last year has no following month
        NaiveDate::from_ymd_opt(next.year, next.month, 1)
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The immediately preceding month; January rolls back to December
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Parse a `YYYY-MM` string
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // Construction is guarded by `MonthPeriod::new`, so the date always exists.
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

/// First and last day of a calendar year
pub fn year_bounds(year: i32) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN);
    let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(NaiveDate::MAX);
    (start, end)
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
    InvalidYear(i32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid period format '{}', expected YYYY-MM", s),
            Self::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
            Self::InvalidYear(y) => write!(f, "Invalid year: {}", y),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        let feb = MonthPeriod::new(2024, 2).unwrap();
        assert_eq!(feb.start_date(), date(2024, 2, 1));
        assert_eq!(feb.end_date(), date(2024, 2, 29));

        let dec = MonthPeriod::new(2025, 12).unwrap();
        assert_eq!(dec.end_date(), date(2025, 12, 31));
    }

    #[test]
    fn test_last_representable_month() {
        let last = MonthPeriod::containing(NaiveDate::MAX);
        assert_eq!(last.month(), 12);
        assert_eq!(last.end_date(), NaiveDate::MAX);
        assert!(last.contains(NaiveDate::MAX));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let jan = MonthPeriod::new(2025, 1).unwrap();
        assert!(jan.contains(date(2025, 1, 1)));
        assert!(jan.contains(date(2025, 1, 31)));
        assert!(!jan.contains(date(2025, 2, 1)));
        assert!(!jan.contains(date(2024, 12, 31)));
    }

    #[test]
    fn test_prev_rolls_over_year() {
        let jan = MonthPeriod::new(2025, 1).unwrap();
        assert_eq!(jan.prev(), MonthPeriod::new(2024, 12).unwrap());

        let jul = MonthPeriod::new(2025, 7).unwrap();
        assert_eq!(jul.prev(), MonthPeriod::new(2025, 6).unwrap());
        assert_eq!(jul.next(), MonthPeriod::new(2025, 8).unwrap());
        assert_eq!(
            MonthPeriod::new(2025, 12).unwrap().next(),
            MonthPeriod::new(2026, 1).unwrap()
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            MonthPeriod::parse("2025-03").unwrap(),
            MonthPeriod::new(2025, 3).unwrap()
        );
        assert_eq!(
            MonthPeriod::parse("2025-13"),
            Err(PeriodParseError::InvalidMonth(13))
        );
        assert!(MonthPeriod::parse("March").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(MonthPeriod::new(2025, 3).unwrap().to_string(), "2025-03");
    }

    #[test]
    fn test_year_bounds() {
        assert_eq!(year_bounds(2025), (date(2025, 1, 1), date(2025, 12, 31)));
    }
}
