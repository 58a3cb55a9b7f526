//! Financial analytics engine
//!
//! Pure functions that reduce a user's already-fetched income and expense
//! records into dashboard views:
//!
//! - `tax`: progressive income-tax computation and slab labels
//! - `aggregate`: monthly buckets, totals and month-over-month statistics
//! - `breakdown`: current-month spending per category
//! - `anomaly`: category-level unusual-spending detection
//! - `summary`: the compact summary handed to the chat assistant
//!
//! Nothing in here performs I/O or mutates its input; every call re-scans
//! the records it is given, so calling a function twice with the same input
//! yields identical output.

pub mod aggregate;
pub mod anomaly;
pub mod breakdown;
pub mod summary;
pub mod tax;

pub use aggregate::{
    current_month_stats, monthly_sums, total, total_balance, MonthStats, MonthlyBuckets,
};
pub use anomaly::{detect_anomalies, Anomaly, MAX_ANOMALIES, MIN_CATEGORY_SAMPLES};
pub use breakdown::{all_time_by_category, expenses_by_category, top_category, CategoryTotal};
pub use summary::FinancialSummary;
pub use tax::{calculate_tax, tax_for_money, tax_slab, tax_slab_label, TaxResult, TaxSlab, TAX_SLABS};

/// Round to the nearest integer, ties toward positive infinity
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to one decimal place, ties toward positive infinity
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.49), 2.0);
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(12.34), 12.3);
        assert_eq!(round_to_tenth(-12.25), -12.2);
        assert_eq!(round_to_tenth(100.0), 100.0);
    }
}
