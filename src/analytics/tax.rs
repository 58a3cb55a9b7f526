//! Progressive income tax (new regime slabs)
//!
//! Tax and slab label are both looked up from [`TAX_SLABS`], so the band used
//! for the amount and the band used for the description always agree.
//! Upper bounds are inclusive. No rounding happens here; callers round for
//! display.

use serde::Serialize;

use crate::models::Money;

/// One band of the progressive slab table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxSlab {
    /// Income at which this band starts
    pub lower: f64,
    /// Inclusive upper bound, `None` for the top band
    pub upper: Option<f64>,
    /// Tax owed on all income up to `lower`
    pub base_tax: f64,
    /// Marginal rate applied above `lower`
    pub rate: f64,
    pub label: &'static str,
}

impl TaxSlab {
    /// Tax owed for an income inside this band
    pub fn tax_for(&self, annual_income: f64) -> f64 {
        (self.base_tax + (annual_income - self.lower) * self.rate).max(0.0)
    }

    fn covers(&self, annual_income: f64) -> bool {
        match self.upper {
            // Written as a negated `>` so NaN lands in the first band.
            Some(upper) => !(annual_income > upper),
            None => true,
        }
    }
}

/// Slab table, lowest band first
pub const TAX_SLABS: [TaxSlab; 6] = [
    TaxSlab {
        lower: 0.0,
        upper: Some(300_000.0),
        base_tax: 0.0,
        rate: 0.0,
        label: "Nil (0%)",
    },
    TaxSlab {
        lower: 300_000.0,
        upper: Some(600_000.0),
        base_tax: 0.0,
        rate: 0.05,
        label: "₹0 + 5% above ₹3,00,000",
    },
    TaxSlab {
        lower: 600_000.0,
        upper: Some(900_000.0),
        base_tax: 15_000.0,
        rate: 0.10,
        label: "₹15,000 + 10% above ₹6,00,000",
    },
    TaxSlab {
        lower: 900_000.0,
        upper: Some(1_200_000.0),
        base_tax: 45_000.0,
        rate: 0.15,
        label: "₹45,000 + 15% above ₹9,00,000",
    },
    TaxSlab {
        lower: 1_200_000.0,
        upper: Some(1_500_000.0),
        base_tax: 90_000.0,
        rate: 0.20,
        label: "₹90,000 + 20% above ₹12,00,000",
    },
    TaxSlab {
        lower: 1_500_000.0,
        upper: None,
        base_tax: 150_000.0,
        rate: 0.30,
        label: "₹1,50,000 + 30% above ₹15,00,000",
    },
];

/// The band an annual income falls into
///
/// Negative income falls into the nil band.
pub fn tax_slab(annual_income: f64) -> &'static TaxSlab {
    TAX_SLABS
        .iter()
        .find(|slab| slab.covers(annual_income))
        .unwrap_or(&TAX_SLABS[TAX_SLABS.len() - 1])
}

/// Tax owed on an annual income
pub fn calculate_tax(annual_income: f64) -> f64 {
    tax_slab(annual_income).tax_for(annual_income)
}

/// Human-readable description of the band an annual income falls into
pub fn tax_slab_label(annual_income: f64) -> &'static str {
    tax_slab(annual_income).label
}

/// Tax owed on an annual income held as [`Money`]
pub fn tax_for_money(annual_income: Money) -> f64 {
    calculate_tax(annual_income.to_f64())
}

/// Tax owed together with the band used to compute it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxResult {
    pub annual_income: f64,
    pub tax: f64,
    pub slab: &'static TaxSlab,
}

impl TaxResult {
    pub fn for_income(annual_income: f64) -> Self {
        let slab = tax_slab(annual_income);
        Self {
            annual_income,
            tax: slab.tax_for(annual_income),
            slab,
        }
    }

    /// Tax as a share of income, in percent (0 when there is no income)
    pub fn effective_rate(&self) -> f64 {
        if self.annual_income > 0.0 {
            self.tax / self.annual_income * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_tax_at_slab_boundaries() {
        assert_eq!(calculate_tax(300_000.0), 0.0);
        assert_eq!(calculate_tax(600_000.0), 15_000.0);
        assert_eq!(calculate_tax(900_000.0), 45_000.0);
        assert_eq!(calculate_tax(1_200_000.0), 90_000.0);
        assert_eq!(calculate_tax(1_500_000.0), 150_000.0);
    }

    #[test]
    fn test_tax_inside_bands() {
        assert!(approx(calculate_tax(400_000.0), 5_000.0));
        assert!(approx(calculate_tax(750_000.0), 30_000.0));
        assert!(approx(calculate_tax(1_000_000.0), 60_000.0));
        assert!(approx(calculate_tax(1_300_000.0), 110_000.0));
        assert!(approx(calculate_tax(2_000_000.0), 300_000.0));
    }

    #[test]
    fn test_tax_is_continuous_across_boundaries() {
        for slab in TAX_SLABS.iter().filter_map(|s| s.upper) {
            let below = calculate_tax(slab);
            let above = calculate_tax(slab + 0.01);
            assert!(above >= below, "tax decreased across {}", slab);
            assert!(above - below < 0.01, "tax jumped across {}", slab);
        }
    }

    #[test]
    fn test_tax_is_non_decreasing() {
        let mut previous = calculate_tax(0.0);
        let mut income = 0.0;
        while income <= 2_000_000.0 {
            let tax = calculate_tax(income);
            assert!(tax >= previous, "tax decreased at {}", income);
            previous = tax;
            income += 12_500.0;
        }
    }

    #[test]
    fn test_slab_labels() {
        assert_eq!(tax_slab_label(0.0), "Nil (0%)");
        assert_eq!(tax_slab_label(300_000.0), "Nil (0%)");
        assert_eq!(tax_slab_label(300_000.01), "₹0 + 5% above ₹3,00,000");
        assert_eq!(tax_slab_label(600_000.0), "₹0 + 5% above ₹3,00,000");
        assert_eq!(tax_slab_label(900_000.0), "₹15,000 + 10% above ₹6,00,000");
        assert_eq!(tax_slab_label(1_200_000.0), "₹45,000 + 15% above ₹9,00,000");
        assert_eq!(tax_slab_label(1_500_000.0), "₹90,000 + 20% above ₹12,00,000");
        assert_eq!(
            tax_slab_label(1_500_000.01),
            "₹1,50,000 + 30% above ₹15,00,000"
        );
    }

    #[test]
    fn test_label_band_matches_tax_band() {
        let samples = [
            (150_000.0, 0),
            (450_000.0, 1),
            (750_000.0, 2),
            (1_050_000.0, 3),
            (1_350_000.0, 4),
            (5_000_000.0, 5),
        ];
        for (income, band) in samples {
            let expected = &TAX_SLABS[band];
            assert_eq!(tax_slab_label(income), expected.label);
            assert!(approx(calculate_tax(income), expected.tax_for(income)));
            assert_eq!(TaxResult::for_income(income).slab, expected);
        }
    }

    #[test]
    fn test_negative_income_is_nil() {
        assert_eq!(calculate_tax(-50_000.0), 0.0);
        assert_eq!(tax_slab_label(-50_000.0), "Nil (0%)");
    }

    #[test]
    fn test_nan_income_is_nil() {
        assert_eq!(calculate_tax(f64::NAN), 0.0);
        assert_eq!(tax_slab_label(f64::NAN), "Nil (0%)");
    }

    #[test]
    fn test_tax_for_money() {
        assert_eq!(tax_for_money(Money::from_major(600_000)), 15_000.0);
    }

    #[test]
    fn test_effective_rate() {
        let result = TaxResult::for_income(1_000_000.0);
        assert!(approx(result.effective_rate(), 6.0));
        assert_eq!(TaxResult::for_income(0.0).effective_rate(), 0.0);
    }
}
