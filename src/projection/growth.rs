//! Compound growth and personal account accumulation
//!
//! Supports:
//! - Level annual growth of a salary or contribution base
//! - Account roll-forward with in-year contributions

use crate::error::{ensure_amount, ensure_rate, PensionResult};

/// Share of a year's interest credited on contributions paid during that year.
/// Monthly payments earn on average 13/24 of the annual rate.
pub const IN_YEAR_INTEREST_WEIGHT: f64 = 13.0 / 24.0;

/// Compound growth helpers
pub struct GrowthProjector;

impl GrowthProjector {
    /// Grow `base_value` at `annual_rate` for `years`: base × (1 + rate)^years
    ///
    /// Zero years and a zero rate are both exact identities.
    pub fn project(base_value: f64, annual_rate: f64, years: u32) -> PensionResult<f64> {
        ensure_amount("base_value", base_value)?;
        ensure_rate("annual_rate", annual_rate)?;

        if years == 0 {
            return Ok(base_value);
        }
        Ok(base_value * (1.0 + annual_rate).powi(years as i32))
    }

    /// Roll an account balance forward one year per payment
    ///
    /// Each year: balance × (1 + r) + payment × (1 + r × 13/24).
    /// `payments` and `rates` must have the same length.
    pub fn accumulate_account(
        current_balance: f64,
        payments: &[f64],
        rates: &[f64],
    ) -> PensionResult<f64> {
        ensure_amount("current_balance", current_balance)?;
        if payments.len() != rates.len() {
            return Err(crate::error::PensionError::invalid_input(
                "payments",
                payments.len(),
                format!("Expected one payment per rate ({} rates)", rates.len()),
            ));
        }

        let mut balance = current_balance;
        for (&payment, &rate) in payments.iter().zip(rates) {
            ensure_amount("payment", payment)?;
            ensure_rate("interest_rate", rate)?;
            balance = balance * (1.0 + rate) + payment * (1.0 + rate * IN_YEAR_INTEREST_WEIGHT);
        }

        Ok(balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_compound_growth() {
        let v = GrowthProjector::project(1000.0, 0.05, 2).unwrap();
        assert_relative_eq!(v, 1102.5, epsilon = 1e-9);

        let v = GrowthProjector::project(1000.0, -0.1, 1).unwrap();
        assert_relative_eq!(v, 900.0, epsilon = 1e-9);
    }

    #[test]
    fn test_full_decline() {
        assert_eq!(GrowthProjector::project(1000.0, -1.0, 3).unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(GrowthProjector::project(-1.0, 0.05, 3).is_err());
        assert!(GrowthProjector::project(1000.0, -1.5, 3).is_err());
        assert!(GrowthProjector::project(f64::NAN, 0.05, 3).is_err());
        assert!(GrowthProjector::project(1000.0, f64::INFINITY, 3).is_err());
    }

    #[test]
    fn test_accumulate_account() {
        // Two years at 50% with 1000 paid each year
        let balance =
            GrowthProjector::accumulate_account(1000.0, &[1000.0, 1000.0], &[0.5, 0.5]).unwrap();
        assert_relative_eq!(balance, 5427.083333333333, epsilon = 1e-9);

        let balance =
            GrowthProjector::accumulate_account(1000.0, &[1000.0, 2000.0], &[0.5, 0.6]).unwrap();
        assert_relative_eq!(balance, 7083.333333333333, epsilon = 1e-9);
    }

    #[test]
    fn test_accumulate_without_payments_is_compounding() {
        let balance =
            GrowthProjector::accumulate_account(1000.0, &[0.0; 3], &[0.1; 3]).unwrap();
        assert_relative_eq!(balance, 1331.0, epsilon = 1e-9);
    }

    #[test]
    fn test_accumulate_length_mismatch() {
        let err = GrowthProjector::accumulate_account(1000.0, &[1.0], &[0.1, 0.1]).unwrap_err();
        assert_eq!(err.field(), Some("payments"));
    }

    proptest! {
        #[test]
        fn prop_zero_rate_is_identity(value in 0u32..10_000_000, years in 0u32..80) {
            let v = value as f64 / 100.0;
            prop_assert_eq!(GrowthProjector::project(v, 0.0, years).unwrap(), v);
        }

        #[test]
        fn prop_zero_years_is_identity(value in 0u32..10_000_000, rate_bp in -9_999i32..5_000) {
            let v = value as f64 / 100.0;
            let rate = rate_bp as f64 / 10_000.0;
            prop_assert_eq!(GrowthProjector::project(v, rate, 0).unwrap(), v);
        }

        #[test]
        fn prop_strictly_monotonic_in_years(
            value in 1u32..1_000_000,
            rate_bp in 1i32..2_000,
            years in 0u32..60
        ) {
            let v = value as f64;
            let r = rate_bp as f64 / 10_000.0;

            let now = GrowthProjector::project(v, r, years).unwrap();
            prop_assert!(GrowthProjector::project(v, r, years + 1).unwrap() > now);

            let now = GrowthProjector::project(v, -r, years).unwrap();
            prop_assert!(GrowthProjector::project(v, -r, years + 1).unwrap() < now);
        }

        #[test]
        fn prop_reproducible(value in 0u32..1_000_000, rate_bp in -5_000i32..5_000, years in 0u32..60) {
            let v = value as f64;
            let r = rate_bp as f64 / 10_000.0;
            let a = GrowthProjector::project(v, r, years).unwrap();
            let b = GrowthProjector::project(v, r, years).unwrap();
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}
