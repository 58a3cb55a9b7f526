//! Spending per category within a month

use serde::Serialize;

use crate::models::{Expense, ExpenseCategory, Money, MonthPeriod};

/// Total spent in one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub name: ExpenseCategory,
    pub value: Money,
}

/// Group the period's expenses by category
///
/// Categories appear in the order they are first met while scanning the
/// records; only categories with at least one record in the period appear.
pub fn expenses_by_category(records: &[Expense], period: &MonthPeriod) -> Vec<CategoryTotal> {
    group_totals(records.iter().filter(|e| period.contains(e.date)))
}

/// Group every expense by category, regardless of date
pub fn all_time_by_category(records: &[Expense]) -> Vec<CategoryTotal> {
    group_totals(records.iter())
}

fn group_totals<'a>(records: impl Iterator<Item = &'a Expense>) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in records {
        match totals.iter_mut().find(|t| t.name == expense.category) {
            Some(entry) => entry.value += expense.amount,
            None => totals.push(CategoryTotal {
                name: expense.category,
                value: expense.amount,
            }),
        }
    }
    totals
}

/// The largest category total; the earliest wins a tie
pub fn top_category(totals: &[CategoryTotal]) -> Option<&CategoryTotal> {
    totals.iter().fold(None, |best: Option<&CategoryTotal>, candidate| match best {
        Some(current) if current.value >= candidate.value => Some(current),
        _ => Some(candidate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;
    use chrono::NaiveDate;

    fn expense(major: i64, y: i32, m: u32, d: u32, category: ExpenseCategory) -> Expense {
        Expense::new(
            UserId::default(),
            Money::from_major(major),
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            category,
        )
    }

    #[test]
    fn test_first_seen_order() {
        let records = vec![
            expense(100, 2025, 3, 2, ExpenseCategory::Food),
            expense(50, 2025, 3, 5, ExpenseCategory::Travel),
            expense(25, 2025, 3, 9, ExpenseCategory::Food),
        ];
        let march = MonthPeriod::new(2025, 3).unwrap();

        assert_eq!(
            expenses_by_category(&records, &march),
            vec![
                CategoryTotal {
                    name: ExpenseCategory::Food,
                    value: Money::from_major(125),
                },
                CategoryTotal {
                    name: ExpenseCategory::Travel,
                    value: Money::from_major(50),
                },
            ]
        );
    }

    #[test]
    fn test_breakdown_is_idempotent() {
        let records = vec![
            expense(40, 2025, 3, 3, ExpenseCategory::Travel),
            expense(15, 2025, 3, 4, ExpenseCategory::Food),
            expense(60, 2025, 3, 8, ExpenseCategory::Travel),
        ];
        let march = MonthPeriod::new(2025, 3).unwrap();

        let first = expenses_by_category(&records, &march);
        let second = expenses_by_category(&records, &march);
        assert_eq!(first, second);
        assert_eq!(first[0].value, Money::from_major(100));
    }

    #[test]
    fn test_records_outside_period_ignored() {
        let records = vec![
            expense(70, 2025, 2, 28, ExpenseCategory::Housing),
            expense(10, 2025, 3, 1, ExpenseCategory::Food),
            expense(20, 2025, 3, 31, ExpenseCategory::Food),
            expense(90, 2025, 4, 1, ExpenseCategory::Housing),
        ];
        let march = MonthPeriod::new(2025, 3).unwrap();
        let totals = expenses_by_category(&records, &march);

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].value, Money::from_major(30));
    }

    #[test]
    fn test_empty_period() {
        let march = MonthPeriod::new(2025, 3).unwrap();
        assert!(expenses_by_category(&[], &march).is_empty());
    }

    #[test]
    fn test_top_category_tie_keeps_first() {
        let records = vec![
            expense(40, 2025, 1, 1, ExpenseCategory::Shopping),
            expense(40, 2025, 2, 1, ExpenseCategory::Education),
            expense(10, 2025, 3, 1, ExpenseCategory::Other),
        ];
        let totals = all_time_by_category(&records);
        let top = top_category(&totals).unwrap();
        assert_eq!(top.name, ExpenseCategory::Shopping);

        assert!(top_category(&[]).is_none());
    }
}
