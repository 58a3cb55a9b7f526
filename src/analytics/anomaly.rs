//! Category-level unusual-spending detection
//!
//! An expense is unusual when it exceeds one and a half times the average of
//! every expense in its category. Categories with too few records to form a
//! meaningful average are skipped.

use chrono::NaiveDate;
use serde::Serialize;

use super::round_half_up;
use crate::models::{Expense, ExpenseCategory, ExpenseId, Money};

/// Categories with fewer records than this are never flagged
pub const MIN_CATEGORY_SAMPLES: usize = 3;

/// Maximum number of anomalies reported
pub const MAX_ANOMALIES: usize = 5;

const THRESHOLD_MULTIPLIER: f64 = 1.5;

/// An expense flagged as unusual for its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Anomaly {
    /// The flagged expense
    pub id: ExpenseId,
    pub category: ExpenseCategory,
    pub amount: Money,
    pub date: NaiveDate,
    /// Category average in whole currency units, rounded
    pub average_amount: i64,
    /// Percent above the category average, rounded
    pub percentage_increase: i64,
    pub description: String,
}

/// Flag expenses far above their category's average
///
/// Returns at most [`MAX_ANOMALIES`] results in scan order: categories in the
/// order they first appear, records in store order within each category. The
/// result is not ranked by severity.
pub fn detect_anomalies(records: &[Expense]) -> Vec<Anomaly> {
    group_by_category(records)
        .into_iter()
        .filter(|(_, group)| group.len() >= MIN_CATEGORY_SAMPLES)
        .flat_map(|(category, group)| category_anomalies(category, &group))
        .take(MAX_ANOMALIES)
        .collect()
}

fn group_by_category(records: &[Expense]) -> Vec<(ExpenseCategory, Vec<&Expense>)> {
    let mut groups: Vec<(ExpenseCategory, Vec<&Expense>)> = Vec::new();
    for expense in records {
        match groups.iter_mut().find(|(category, _)| *category == expense.category) {
            Some((_, group)) => group.push(expense),
            None => groups.push((expense.category, vec![expense])),
        }
    }
    groups
}

fn category_anomalies(category: ExpenseCategory, group: &[&Expense]) -> Vec<Anomaly> {
    let sum: Money = group.iter().map(|e| e.amount).sum();
    let average = sum.to_f64() / group.len() as f64;
    let threshold = average * THRESHOLD_MULTIPLIER;

    group
        .iter()
        .filter(|e| e.amount.to_f64() > threshold)
        .map(|e| Anomaly {
            id: e.id,
            category,
            amount: e.amount,
            date: e.date,
            average_amount: round_half_up(average) as i64,
            percentage_increase: round_half_up((e.amount.to_f64() / average - 1.0) * 100.0)
                as i64,
            description: format!("Unusual spending in {} category", category),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;

    fn expense(major: i64, category: ExpenseCategory) -> Expense {
        Expense::new(
            UserId::default(),
            Money::from_major(major),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            category,
        )
    }

    fn expenses(amounts: &[i64], category: ExpenseCategory) -> Vec<Expense> {
        amounts.iter().map(|a| expense(*a, category)).collect()
    }

    #[test]
    fn test_single_outlier_flagged() {
        let records = expenses(&[100, 100, 100, 300], ExpenseCategory::Food);
        let anomalies = detect_anomalies(&records);

        assert_eq!(anomalies.len(), 1);
        let anomaly = &anomalies[0];
        assert_eq!(anomaly.id, records[3].id);
        assert_eq!(anomaly.amount, Money::from_major(300));
        assert_eq!(anomaly.average_amount, 150);
        assert_eq!(anomaly.percentage_increase, 100);
        assert_eq!(anomaly.description, "Unusual spending in Food category");
    }

    #[test]
    fn test_small_category_never_flagged() {
        let records = expenses(&[10, 10_000], ExpenseCategory::Travel);
        assert!(detect_anomalies(&records).is_empty());
    }

    #[test]
    fn test_threshold_is_strict() {
        // average 75, threshold 112.5
        let records = expenses(&[75, 75, 150, 0], ExpenseCategory::Food);
        assert_eq!(detect_anomalies(&records).len(), 1);

        let flat = expenses(&[100, 100, 100, 100], ExpenseCategory::Food);
        assert!(detect_anomalies(&flat).is_empty());
    }

    #[test]
    fn test_amount_equal_to_threshold_not_flagged() {
        // average 200, threshold 300
        let records = expenses(&[150, 150, 300], ExpenseCategory::Housing);
        assert!(detect_anomalies(&records).is_empty());
    }

    #[test]
    fn test_all_zero_category() {
        let records = expenses(&[0, 0, 0], ExpenseCategory::Other);
        assert!(detect_anomalies(&records).is_empty());
    }

    #[test]
    fn test_truncates_to_five_in_scan_order() {
        // Food: average 250, six records of 400 are each +60%.
        let mut records = expenses(&[100, 100, 100, 100, 100, 100], ExpenseCategory::Food);
        records.extend(expenses(&[400, 400, 400, 400, 400, 400], ExpenseCategory::Food));
        // Travel: a far more severe outlier, seen later.
        records.extend(expenses(&[10, 10, 10, 1000], ExpenseCategory::Travel));

        let anomalies = detect_anomalies(&records);

        assert_eq!(anomalies.len(), MAX_ANOMALIES);
        assert!(anomalies
            .iter()
            .all(|a| a.category == ExpenseCategory::Food && a.percentage_increase == 60));
        let expected: Vec<ExpenseId> = records[6..11].iter().map(|e| e.id).collect();
        let found: Vec<ExpenseId> = anomalies.iter().map(|a| a.id).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_categories_reported_in_first_seen_order() {
        let mut records = expenses(&[10, 10, 10], ExpenseCategory::Travel);
        records.insert(1, expense(10, ExpenseCategory::Shopping));
        records.extend(expenses(&[10, 10, 100], ExpenseCategory::Shopping));
        records.push(expense(100, ExpenseCategory::Travel));

        let anomalies = detect_anomalies(&records);
        let categories: Vec<ExpenseCategory> = anomalies.iter().map(|a| a.category).collect();
        assert_eq!(
            categories,
            vec![ExpenseCategory::Travel, ExpenseCategory::Shopping]
        );
    }

    #[test]
    fn test_rounding_of_average_and_increase() {
        // average 1000/3 = 333.33, 700 is +110%
        let records = expenses(&[150, 150, 700], ExpenseCategory::Healthcare);
        let anomalies = detect_anomalies(&records);
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].average_amount, 333);
        assert_eq!(anomalies[0].percentage_increase, 110);
    }

    #[test]
    fn test_detection_is_idempotent() {
        let records = expenses(&[100, 100, 100, 300], ExpenseCategory::Food);
        assert_eq!(detect_anomalies(&records), detect_anomalies(&records));
    }

    #[test]
    fn test_empty_input() {
        assert!(detect_anomalies(&[]).is_empty());
    }
}
