//! Forecast output structures

use serde::{Deserialize, Serialize};

/// Projected values at the end of one future year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastYearRow {
    /// Years elapsed since the forecast start (1-indexed)
    pub year: u32,
    pub age: u8,
    pub social_salary: f64,
    pub contribution_base: f64,

    /// Contribution base relative to social salary for this year
    pub contribution_ratio: f64,

    /// Payment into the personal account during this year
    pub account_payment: f64,
    pub account_balance: f64,
    pub years_contributed: u32,
}

/// Pension forecast at retirement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PensionForecastResult {
    pub retirement_age: u8,
    pub years_to_retirement: u32,

    // Projected inputs to the calculators
    pub projected_social_salary: f64,
    pub projected_contribution_base: f64,
    pub contribution_index: f64,
    pub years_contributed: u32,
    pub projected_account_balance: f64,
    pub months_divisor: u32,

    // Monthly pension components
    pub fundamental_pension: f64,
    pub personal_pension: f64,
    pub total_pension: f64,

    /// Year-by-year trace (empty unless detailed output is requested)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub yearly: Vec<ForecastYearRow>,
}

impl PensionForecastResult {
    /// Share of the total paid by the personal account
    pub fn personal_share(&self) -> f64 {
        if self.total_pension <= 0.0 {
            0.0
        } else {
            self.personal_pension / self.total_pension
        }
    }

    /// Total of all account payments in the trace
    pub fn total_account_payments(&self) -> f64 {
        self.yearly.iter().map(|r| r.account_payment).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(fundamental: f64, personal: f64) -> PensionForecastResult {
        PensionForecastResult {
            retirement_age: 60,
            years_to_retirement: 20,
            projected_social_salary: 0.0,
            projected_contribution_base: 0.0,
            contribution_index: 1.0,
            years_contributed: 35,
            projected_account_balance: 0.0,
            months_divisor: 139,
            fundamental_pension: fundamental,
            personal_pension: personal,
            total_pension: fundamental + personal,
            yearly: Vec::new(),
        }
    }

    #[test]
    fn test_personal_share() {
        assert_eq!(result(300.0, 100.0).personal_share(), 0.25);
        assert_eq!(result(0.0, 0.0).personal_share(), 0.0);
    }

    #[test]
    fn test_total_account_payments() {
        let row = |year: u32, payment: f64| ForecastYearRow {
            year,
            age: 40 + year as u8,
            social_salary: 8000.0,
            contribution_base: 8000.0,
            contribution_ratio: 1.0,
            account_payment: payment,
            account_balance: 0.0,
            years_contributed: 20 + year,
        };

        let mut with_trace = result(300.0, 100.0);
        assert_eq!(with_trace.total_account_payments(), 0.0);

        with_trace.yearly = vec![row(1, 640.0), row(2, 665.6), row(3, 0.0)];
        assert_eq!(with_trace.total_account_payments(), 640.0 + 665.6);
    }

    #[test]
    fn test_trace_omitted_when_empty() {
        let json = serde_json::to_string(&result(300.0, 100.0)).unwrap();
        assert!(!json.contains("yearly"));

        let parsed: PensionForecastResult = serde_json::from_str(&json).unwrap();
        assert!(parsed.yearly.is_empty());
    }
}
