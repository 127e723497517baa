//! Entry points for command layers
//!
//! Each operation uses the statutory table and default rules. Callers that
//! need other rules or an index policy build a [`PensionForecastEngine`].

use crate::error::PensionResult;
use crate::projection::{PensionForecastEngine, PensionForecastInput, PensionForecastResult};

/// Monthly fundamental pension for current values
pub fn fundamental_pension(
    average_social_salary: f64,
    contribution_index: f64,
    years_contributed: u32,
) -> PensionResult<f64> {
    PensionForecastEngine::default().fundamental_pension(
        average_social_salary,
        contribution_index,
        years_contributed,
    )
}

/// Monthly personal pension for a current account balance
pub fn personal_pension(account_balance: f64, retirement_age: u8) -> PensionResult<f64> {
    PensionForecastEngine::default().personal_pension(account_balance, retirement_age)
}

/// Forecast both pension components at retirement
pub fn forecast_pension(input: &PensionForecastInput) -> PensionResult<PensionForecastResult> {
    PensionForecastEngine::default().forecast(input)
}
